//! RFC 9457 Problem Details for rejected requests.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ApiError;
use crate::response::{ContentType, IntoResponse, Response};
use crate::status::Status;

/// Problem type URI for input that parsed but failed validation.
pub const PROBLEM_INVALID_ARGUMENT: &str = "/problems/invalid-argument";

/// Problem type URI for input that could not be parsed.
pub const PROBLEM_BAD_REQUEST: &str = "/problems/bad-request";

/// Problem Details response body.
///
/// ```
/// use demo_api::{ProblemDetails, Status, PROBLEM_INVALID_ARGUMENT};
///
/// let problem = ProblemDetails::new(PROBLEM_INVALID_ARGUMENT, "Invalid Argument", Status::BadRequest)
///     .with_detail("Cannot divide by zero");
/// assert_eq!(problem.status, 400);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: Status) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<&ApiError> for ProblemDetails {
    fn from(err: &ApiError) -> Self {
        let (type_uri, title) = match err {
            ApiError::InvalidArgument(_) => (PROBLEM_INVALID_ARGUMENT, "Invalid Argument"),
            ApiError::BadRequest(_) => (PROBLEM_BAD_REQUEST, "Bad Request"),
        };
        Self::new(type_uri, title, Status::BadRequest).with_detail(err.detail())
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = Status::try_from(self.status).unwrap_or(Status::InternalServerError);
        match serde_json::to_vec(&self) {
            Ok(body) => Response::builder()
                .status(status)
                .bytes(ContentType::ProblemJson, body),
            Err(e) => {
                error!(error = %e, "failed to serialize problem details");
                Response::status(Status::InternalServerError)
            }
        }
    }
}
