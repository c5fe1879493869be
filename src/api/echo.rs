//! `POST /api/echo`: returns the posted message with a server timestamp.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ApiError, Json, Request};

/// Request body. `message` may be absent or `null` on the wire; both are
/// rejected by [`respond`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EchoRequest {
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EchoResponse {
    pub message: String,
    /// Milliseconds since the Unix epoch at handling time.
    pub timestamp: i64,
}

/// Echoes `request.message` verbatim, stamped with `now_millis`.
///
/// Fails with [`ApiError::InvalidArgument`] when the message is missing or
/// empty. Whitespace counts as content.
pub fn respond(request: EchoRequest, now_millis: i64) -> Result<EchoResponse, ApiError> {
    match request.message {
        Some(message) if !message.is_empty() => Ok(EchoResponse { message, timestamp: now_millis }),
        _ => Err(ApiError::invalid_argument("Message cannot be empty")),
    }
}

pub async fn handle_echo(req: Request) -> Result<Json<EchoResponse>, ApiError> {
    let body: EchoRequest = req.json()?;
    let response = respond(body, Utc::now().timestamp_millis())?;
    debug!(len = response.message.len(), "echoing message");
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: Option<&str>) -> EchoRequest {
        EchoRequest { message: message.map(str::to_owned) }
    }

    #[test]
    fn echoes_message_verbatim() {
        let response = respond(request(Some("Hello Copilot")), 1_700_000_000_000).unwrap();
        assert_eq!(response.message, "Hello Copilot");
        assert_eq!(response.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert_eq!(respond(request(Some("  ")), 0).unwrap().message, "  ");
    }

    #[test]
    fn empty_or_missing_message_is_invalid() {
        let expected = ApiError::invalid_argument("Message cannot be empty");
        assert_eq!(respond(request(Some("")), 0).unwrap_err(), expected);
        assert_eq!(respond(request(None), 0).unwrap_err(), expected);
    }

    #[test]
    fn absent_and_null_deserialize_to_none() {
        let absent: EchoRequest = serde_json::from_str("{}").unwrap();
        let null: EchoRequest = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert_eq!(absent.message, None);
        assert_eq!(null.message, None);
    }

    #[test]
    fn response_wire_shape() {
        let response = EchoResponse { message: "hi".into(), timestamp: 42 };
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"message":"hi","timestamp":42}"#);
    }
}
