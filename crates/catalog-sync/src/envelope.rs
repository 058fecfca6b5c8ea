//! Wire Envelopes
//!
//! The backend wraps every answer: `{ payload }` for reads,
//! `{ message, payload? }` for writes and `{ errors }` on rejected input.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::transport::ApiResponse;

#[derive(Deserialize)]
pub(crate) struct ListEnvelope<R> {
    /// Some endpoints answer `null` for an empty collection.
    pub payload: Option<Vec<R>>,
}

#[derive(Deserialize)]
pub(crate) struct ItemEnvelope<R> {
    pub payload: R,
}

/// Write acknowledgement. The payload stays raw so an echo the client can't
/// decode never fails a write that the server already accepted.
#[derive(Deserialize)]
pub(crate) struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a 2xx body or converts the response into a [`ClientError`].
pub(crate) fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ClientError> {
    if !response.is_success() {
        return Err(error_from(response));
    }
    // 204 and friends: treat an empty body as an empty envelope
    let body = if response.body.trim().is_empty() {
        "{}"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|e| {
        ClientError::http(response.status, format!("Invalid response body: {}", e))
    })
}

fn error_from(response: &ApiResponse) -> ClientError {
    let status = response.status;
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) if !envelope.errors.is_empty() => ClientError::validation(envelope.errors),
        Ok(ErrorEnvelope {
            message: Some(message),
            ..
        }) if !message.trim().is_empty() => ClientError::http(status, message),
        _ => ClientError::http(status, format!("HTTP {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    #[test]
    fn test_null_list_payload() {
        let response = ApiResponse::new(200, r#"{"payload":null}"#);
        let envelope: ListEnvelope<Category> = decode(&response).unwrap();
        assert!(envelope.payload.is_none());
    }

    #[test]
    fn test_nameless_row_keeps_collection() {
        let response = ApiResponse::new(
            200,
            r#"{"payload":[{"id":1,"name":"Pens"},{"id":2},{"_id":"c3","name":"Ink"}]}"#,
        );
        let envelope: ListEnvelope<Category> = decode(&response).unwrap();
        let names: Vec<_> = envelope
            .payload
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Pens", "", "Ink"]);
    }

    #[test]
    fn test_errors_become_validation() {
        let response = ApiResponse::new(400, r#"{"errors":["Name is required","Price must be 0 or greater"]}"#);
        let err = decode::<MessageEnvelope>(&response).err().unwrap();
        assert_eq!(
            err,
            ClientError::validation(vec![
                "Name is required".into(),
                "Price must be 0 or greater".into()
            ])
        );
    }

    #[test]
    fn test_server_message_becomes_transport_reason() {
        let response = ApiResponse::new(404, r#"{"message":"Product not found"}"#);
        let err = decode::<MessageEnvelope>(&response).err().unwrap();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_html_error_page_falls_back_to_status() {
        let response = ApiResponse::new(502, "<html>Bad Gateway</html>");
        let err = decode::<MessageEnvelope>(&response).err().unwrap();
        assert_eq!(err, ClientError::http(502, "HTTP 502"));
    }

    #[test]
    fn test_empty_success_body() {
        let response = ApiResponse::new(204, "");
        let envelope: MessageEnvelope = decode(&response).unwrap();
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_garbled_success_body() {
        let response = ApiResponse::new(200, "not json");
        let err = decode::<MessageEnvelope>(&response).err().unwrap();
        assert_eq!(err.status(), Some(200));
    }
}
