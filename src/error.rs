//! Error types.
//!
//! [`ApiError`] is what a handler returns when it rejects a request; the
//! boundary turns it into a `400` with a Problem Details body.
//! [`Error`] surfaces infrastructure failures: bad configuration, binding to
//! a port, accepting a connection.

use thiserror::Error;

use crate::config::ConfigError;
use crate::problem::ProblemDetails;
use crate::response::{IntoResponse, Response};

/// The error type returned by the service's fallible startup operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// A rejected request.
///
/// Both variants are client errors and map to `400 Bad Request`. They differ
/// in where the request was rejected: `BadRequest` means the input could not
/// be parsed at all, `InvalidArgument` means it parsed but failed validation.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument(detail.into())
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest(detail.into())
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidArgument(d) | Self::BadRequest(d) => d,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ProblemDetails::from(&self).into_response()
    }
}
