//! # demo-api
//!
//! A small REST service: a health check, an echo endpoint, and three integer
//! calculations, served over a minimal hyper-based HTTP layer.
//!
//! ## Layers
//!
//! - HTTP: [`Server`] accepts connections, [`Router`] maps method + path to
//!   a handler, [`Request`] / [`Response`] carry the data.
//! - API: [`api`] holds the handlers and their JSON types; [`api::router`]
//!   wires them up.
//!
//! Handlers are plain `async fn(Request) -> impl IntoResponse`. Validation
//! failures are returned as [`ApiError`] and rendered as `400` Problem
//! Details by the boundary.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use demo_api::{Config, Server, api, logging};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), demo_api::Error> {
//!     let config = Config::from_env()?;
//!     logging::init_logging(&config.logging);
//!     Server::bind(config.addr()).await?.serve(api::router()).await;
//!     Ok(())
//! }
//! ```

mod error;
mod handler;
mod method;
mod middleware;
mod problem;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod logging;

pub use config::{Config, ConfigError};
pub use error::{ApiError, Error};
pub use handler::Handler;
pub use method::Method;
pub use problem::{PROBLEM_BAD_REQUEST, PROBLEM_INVALID_ARGUMENT, ProblemDetails};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
