//! Per-request tracing.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, error, info, info_span};

use crate::response::Response;

/// Runs `fut` inside an `http_request` span and logs its outcome.
///
/// Responses below 500 are logged at `info`, server errors at `error`.
pub(crate) async fn instrument<F>(method: &http::Method, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("http_request", method = %method, path = %path);
    async move {
        let started = Instant::now();
        let response = fut.await;
        let status = response.status_code();
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        if status.is_server_error() {
            error!(status = status.as_u16(), latency_ms, "request failed");
        } else {
            info!(status = status.as_u16(), latency_ms, "request completed");
        }
        response
    }
    .instrument(span)
    .await
}
