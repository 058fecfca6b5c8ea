//! REST API Bindings
//!
//! Resource clients for the catalog backend, sent over `fetch`.

mod http;

use catalog_sync::{ApiConfig, Resource, ResourceClient};

pub use http::HttpTransport;

/// Client for one resource collection
pub type Client<R> = ResourceClient<R, HttpTransport>;

pub fn client<R: Resource>(config: &ApiConfig) -> Client<R> {
    ResourceClient::new(HttpTransport::new(config.clone()))
}
