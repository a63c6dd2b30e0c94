//! Proxy-response builders shared by the API handler.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::errors::AiqError;

/// Returns a JSON response with the given status code and serialized body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response carrying `payload` as JSON.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    match serde_json::to_value(payload) {
        Ok(body) => json_response(200, &body),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            err_response(500, crate::errors::GENERIC_SERVER_ERROR)
        }
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Maps a pipeline error onto its response.
#[must_use]
pub fn error_to_response(err: &AiqError) -> Value {
    err_response(err.status_code(), &err.client_message())
}
