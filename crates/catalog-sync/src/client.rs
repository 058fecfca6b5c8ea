//! Resource Client
//!
//! list/get/create/update/delete against one REST collection, with every
//! response normalized into typed records or a [`ClientError`].

use std::marker::PhantomData;

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::envelope::{decode, ItemEnvelope, ListEnvelope, MessageEnvelope};
use crate::error::{ClientError, ClientResult};
use crate::record::{RecordId, Resource};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Characters escaped in an id path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Acknowledged write: the server message plus the echoed record, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<R> {
    pub message: String,
    pub item: Option<R>,
}

/// Client for the collection at `/{R::PATH}`.
#[derive(Clone)]
pub struct ResourceClient<R, T> {
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn collection_path() -> String {
        format!("/{}", R::PATH)
    }

    fn record_path(id: &RecordId) -> String {
        let id = id.to_string();
        format!("/{}/{}", R::PATH, utf8_percent_encode(&id, PATH_SEGMENT))
    }

    /// `GET /{resource}`
    pub async fn list(&self) -> ClientResult<Vec<R>> {
        let response = self
            .execute(ApiRequest::new(Method::Get, Self::collection_path()))
            .await?;
        let envelope: ListEnvelope<R> = decode(&response)?;
        Ok(envelope.payload.unwrap_or_default())
    }

    /// `GET /{resource}/{id}`
    pub async fn get(&self, id: &RecordId) -> ClientResult<R> {
        let response = self
            .execute(ApiRequest::new(Method::Get, Self::record_path(id)))
            .await?;
        let envelope: ItemEnvelope<R> = decode(&response)?;
        Ok(envelope.payload)
    }

    /// `POST /{resource}`
    pub async fn create(&self, draft: &R::Draft) -> ClientResult<Mutation<R>> {
        let request = ApiRequest::new(Method::Post, Self::collection_path()).with_body(encode(draft)?);
        let response = self.execute(request).await?;
        mutation(&response, "Created")
    }

    /// `PATCH /{resource}/{id}`
    pub async fn update(&self, id: &RecordId, draft: &R::Draft) -> ClientResult<Mutation<R>> {
        let request = ApiRequest::new(Method::Patch, Self::record_path(id)).with_body(encode(draft)?);
        let response = self.execute(request).await?;
        mutation(&response, "Updated")
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete(&self, id: &RecordId) -> ClientResult<Mutation<R>> {
        let response = self
            .execute(ApiRequest::new(Method::Delete, Self::record_path(id)))
            .await?;
        mutation(&response, "Deleted")
    }

    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();
        debug!("{} {}", method.as_str(), path);
        let result = self.transport.send(request).await;
        match &result {
            Ok(response) => debug!("{} {} -> {}", method.as_str(), path, response.status),
            Err(err) => debug!("{} {} failed: {}", method.as_str(), path, err),
        }
        result
    }
}

fn encode<D: serde::Serialize>(draft: &D) -> ClientResult<String> {
    serde_json::to_string(draft)
        .map_err(|e| ClientError::transport(format!("Could not encode request: {}", e)))
}

fn mutation<R: Resource>(response: &ApiResponse, fallback: &str) -> ClientResult<Mutation<R>> {
    let envelope: MessageEnvelope = decode(response)?;
    let item = envelope
        .payload
        .and_then(|value| match serde_json::from_value::<R>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                debug!("ignoring undecodable {} payload: {}", R::PATH, e);
                None
            }
        });
    let message = envelope
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Ok(Mutation { message, item })
}
