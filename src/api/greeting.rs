//! Plain-text greetings on `/` and `/hello`.

use crate::Request;

pub const HOME_GREETING: &str = "Hello World from Spring Boot 🚀";
pub const HELLO_GREETING: &str = "Hello from /hello endpoint";

pub async fn home(_req: Request) -> &'static str {
    HOME_GREETING
}

pub async fn hello(_req: Request) -> &'static str {
    HELLO_GREETING
}
