//! REST endpoints.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`greeting::home`] |
//! | GET | `/hello` | [`greeting::hello`] |
//! | GET | `/api/health` | [`health::health`] |
//! | POST | `/api/echo` | [`echo::handle_echo`] |
//! | GET | `/api/calculate/sum` | [`calculate::handle_sum`] |
//! | GET | `/api/calculate/product` | [`calculate::handle_product`] |
//! | GET | `/api/calculate/divide` | [`calculate::handle_divide`] |

pub mod calculate;
pub mod echo;
pub mod greeting;
pub mod health;

use crate::Router;

/// Builds the router with every endpoint registered.
pub fn router() -> Router {
    Router::new()
        .get("/", greeting::home)
        .get("/hello", greeting::hello)
        .get("/api/health", health::health)
        .post("/api/echo", echo::handle_echo)
        .get("/api/calculate/sum", calculate::handle_sum)
        .get("/api/calculate/product", calculate::handle_product)
        .get("/api/calculate/divide", calculate::handle_divide)
}
