//! Route handlers and the type they are stored as.
//!
//! Every endpoint in [`api`](crate::api) is an `async fn(Request)` whose
//! output implements [`IntoResponse`]. The route table holds all of them in
//! one `matchit` tree per method, so at registration each handler is turned
//! into an [`Endpoint`]: a shared closure that runs the handler and renders
//! its output.
//!
//! ```text
//! async fn handle_sum(req: Request) -> Result<Json<CalculationResult>, ApiError>
//!        ↓ Router::get("/api/calculate/sum", handle_sum)
//! Endpoint = Arc<dyn Fn(Request) -> EndpointFuture>
//!        ↓ endpoint(req)
//! Response
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// Future returned by an [`Endpoint`].
pub(crate) type EndpointFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A registered handler, shared by every request routed to it.
#[doc(hidden)]
pub type Endpoint = Arc<dyn Fn(Request) -> EndpointFuture + Send + Sync + 'static>;

/// Anything [`Router::on`](crate::Router::on) accepts as a handler.
///
/// Sealed. It holds for every `async fn(Request) -> R` (or closure of that
/// shape) where `R: IntoResponse`, which covers `&'static str`, `String`,
/// [`Json<T>`](crate::Json), [`Status`](crate::Status), [`Response`] and
/// `Result<_, ApiError>` of those.
pub trait Handler: sealed::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_endpoint(self) -> Endpoint;
}

mod sealed {
    pub trait Sealed {}
}

impl<F, Fut, R> sealed::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_endpoint(self) -> Endpoint {
        Arc::new(move |req: Request| {
            let fut = self(req);
            Box::pin(async move { fut.await.into_response() }) as EndpointFuture
        })
    }
}
