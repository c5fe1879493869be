//! Health check.
//!
//! `GET /api/health` answers whenever the process can serve HTTP at all; it
//! has no dependencies to check.

use serde::{Deserialize, Serialize};

use crate::{Json, Request};

/// Health status body: always `{"status":"UP", ...}`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            message: "Application is running successfully".to_string(),
        }
    }
}

pub async fn health(_req: Request) -> Json<HealthStatus> {
    Json(HealthStatus::up())
}
