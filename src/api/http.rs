//! HTTP Transport
//!
//! `fetch`-backed transport via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use catalog_sync::{ApiConfig, ApiRequest, ApiResponse, ClientError, Method, Transport};

#[derive(Clone)]
pub struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        match &self.config.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let builder = self.builder(&request);
        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| ClientError::transport(format!("Could not build request: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ClientError::transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::http(status, format!("Could not read response: {}", e)))?;
        Ok(ApiResponse { status, body })
    }
}
