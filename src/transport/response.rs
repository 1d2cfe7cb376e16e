use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ApiError;

pub const PING_ACK: &str = "pong";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no body")]
    EmptyBody,

    #[error("unexpected ping acknowledgement: {0:?}")]
    UnexpectedPing(String),
}

#[derive(Debug, Clone, Deserialize)]
struct PingJsonResponse {
    ping: String,
}

/// Decode a success body into the caller's destination type.
pub fn decode_json_response<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    if body.trim().is_empty() {
        return Err(TransportError::EmptyBody);
    }
    Ok(serde_json::from_str(body)?)
}

/// Decode the `{code, message, errors}` document sent with non-success statuses.
///
/// A body that is JSON but carries neither a code nor a message is not treated as an error
/// document.
pub fn decode_error_document(body: &str) -> Result<ApiError, TransportError> {
    let parsed: ApiError = decode_json_response(body)?;
    if parsed.code == 0 && parsed.message.is_empty() {
        return Err(TransportError::EmptyBody);
    }
    Ok(parsed)
}

pub fn decode_ping_response(body: &str) -> Result<(), TransportError> {
    let parsed: PingJsonResponse = decode_json_response(body)?;
    if parsed.ping != PING_ACK {
        return Err(TransportError::UnexpectedPing(parsed.ping));
    }
    Ok(())
}
