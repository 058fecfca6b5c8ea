//! In-memory REST backend for tests.
//!
//! Answers the same envelopes as the real API and records every request.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use serde_json::{json, Map, Value};

use crate::error::ClientError;
use crate::record::RecordId;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Default)]
struct State {
    collections: HashMap<String, Vec<Value>>,
    next_id: i64,
    requests: Vec<ApiRequest>,
    fail_next: Option<ClientError>,
    mongo_ids: bool,
}

#[derive(Default)]
pub(crate) struct MemoryBackend {
    state: RefCell<State>,
}

impl MemoryBackend {
    /// Integer `id` keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// String `_id` keys.
    pub fn with_mongo_ids() -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().mongo_ids = true;
        backend
    }

    /// Inserts a record directly, bypassing validation.
    pub fn seed(&self, resource: &str, fields: Value) -> RecordId {
        let mut state = self.state.borrow_mut();
        let mut record = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let id = state.assign_id(&mut record);
        state
            .collections
            .entry(resource.to_string())
            .or_default()
            .push(Value::Object(record));
        id
    }

    pub fn records(&self, resource: &str) -> Vec<Value> {
        self.state
            .borrow()
            .collections
            .get(resource)
            .cloned()
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }

    /// Makes the next request fail before reaching a handler.
    pub fn fail_next(&self, err: ClientError) {
        self.state.borrow_mut().fail_next = Some(err);
    }
}

impl State {
    fn assign_id(&mut self, record: &mut Map<String, Value>) -> RecordId {
        self.next_id += 1;
        if self.mongo_ids {
            let id = format!("{:024x}", self.next_id);
            record.insert("_id".to_string(), Value::String(id.clone()));
            RecordId::Text(id)
        } else {
            record.insert("id".to_string(), json!(self.next_id));
            RecordId::Int(self.next_id)
        }
    }

    fn key_field(&self) -> &'static str {
        if self.mongo_ids {
            "_id"
        } else {
            "id"
        }
    }

    fn position(&self, resource: &str, id: &str) -> Option<usize> {
        let key = self.key_field();
        self.collections.get(resource)?.iter().position(|record| {
            match record.get(key) {
                Some(Value::String(s)) => s == id,
                Some(Value::Number(n)) => n.to_string() == id,
                _ => false,
            }
        })
    }

    fn handle(&mut self, request: &ApiRequest) -> ApiResponse {
        let segments: Vec<String> = request
            .path
            .trim_start_matches('/')
            .split('/')
            .map(|s| percent_decode_str(s).decode_utf8_lossy().to_string())
            .collect();
        let body: Option<Value> = request
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok());

        match (request.method, segments.as_slice()) {
            (Method::Get, [resource]) => {
                let records = self.collections.get(resource).cloned().unwrap_or_default();
                respond(200, json!({ "payload": records }))
            }
            (Method::Get, [resource, id]) => match self.position(resource, id) {
                Some(index) => respond(200, json!({ "payload": self.collections[resource][index] })),
                None => not_found(),
            },
            (Method::Post, [resource]) => {
                let mut record = match body {
                    Some(Value::Object(map)) => map,
                    _ => return respond(400, json!({ "errors": ["Body must be an object"] })),
                };
                let name = record.get("name").and_then(Value::as_str).unwrap_or("");
                if name.trim().is_empty() {
                    return respond(400, json!({ "errors": ["Name is required"] }));
                }
                let taken = self
                    .collections
                    .get(resource)
                    .is_some_and(|records| records.iter().any(|r| r.get("name").and_then(Value::as_str) == Some(name)));
                if taken {
                    return respond(400, json!({ "errors": ["Name already exists"] }));
                }
                self.assign_id(&mut record);
                let record = Value::Object(record);
                self.collections
                    .entry(resource.clone())
                    .or_default()
                    .push(record.clone());
                respond(201, json!({ "message": "Created", "payload": record }))
            }
            (Method::Patch, [resource, id]) => {
                let Some(index) = self.position(resource, id) else {
                    return not_found();
                };
                if let (Some(Value::Object(changes)), Some(Value::Object(existing))) = (
                    body,
                    self.collections.get_mut(resource).map(|c| &mut c[index]),
                ) {
                    for (key, value) in changes {
                        existing.insert(key, value);
                    }
                }
                respond(200, json!({ "message": "Updated" }))
            }
            (Method::Delete, [resource, id]) => match self.position(resource, id) {
                Some(index) => {
                    if let Some(records) = self.collections.get_mut(resource) {
                        records.remove(index);
                    }
                    respond(200, json!({ "message": "Deleted" }))
                }
                None => not_found(),
            },
            _ => respond(405, json!({ "message": "Method not allowed" })),
        }
    }
}

fn respond(status: u16, body: Value) -> ApiResponse {
    ApiResponse::new(status, body.to_string())
}

fn not_found() -> ApiResponse {
    respond(404, json!({ "message": "Not found" }))
}

#[async_trait(?Send)]
impl Transport for MemoryBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        if let Some(err) = state.fail_next.take() {
            return Err(err);
        }
        Ok(state.handle(&request))
    }
}
