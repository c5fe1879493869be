//! Radix-tree request router.
//!
//! One tree per HTTP method, O(path-length) lookup. A path that is
//! registered under some other method answers `405` with an `allow` header;
//! anything else is `404`. `HEAD` is served by the `GET` handler with the
//! body dropped.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use matchit::Router as MatchitRouter;

use crate::handler::{Endpoint, Handler};
use crate::method::Method;
use crate::middleware::trace;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Registration methods return `self` so calls chain.
#[derive(Default)]
pub struct Router {
    routes: HashMap<Method, MatchitRouter<Endpoint>>,
}

/// Result of matching a method + path against the route table.
pub(crate) enum Lookup {
    Found(Endpoint, HashMap<String, String>),
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup, so this is a
    /// programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_endpoint())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    /// `HEAD` falls back to the `GET` route for the same path.
    pub(crate) fn lookup(&self, method: Method, path: &str) -> Lookup {
        let found = self.find(method, path).or_else(|| match method {
            Method::Head => self.find(Method::Get, path),
            _ => None,
        });
        if let Some((handler, params)) = found {
            return Lookup::Found(handler, params);
        }

        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();
        if allowed.contains(&Method::Get) && !allowed.contains(&Method::Head) {
            allowed.push(Method::Head);
        }
        if allowed.is_empty() {
            Lookup::NotFound
        } else {
            allowed.sort();
            Lookup::MethodNotAllowed(allowed)
        }
    }

    fn find(&self, method: Method, path: &str) -> Option<(Endpoint, HashMap<String, String>)> {
        let matched = self.routes.get(&method)?.at(path).ok()?;
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((Arc::clone(matched.value), params))
    }

    /// Routes one in-memory request and returns the response, without a
    /// socket. Runs the same path as a request arriving through [`Server`](crate::Server).
    ///
    /// ```rust
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// use bytes::Bytes;
    /// use demo_api::{Request, Router, Status};
    ///
    /// async fn ping(_req: Request) -> &'static str { "pong" }
    ///
    /// let app = Router::new().get("/ping", ping);
    /// let req = http::Request::get("/ping").body(Bytes::new()).unwrap();
    /// let response = app.oneshot(req).await;
    /// assert_eq!(response.status_code(), Status::Ok);
    /// # }
    /// ```
    pub async fn oneshot(&self, req: http::Request<Bytes>) -> Response {
        let (parts, body) = req.into_parts();
        self.dispatch(parts, body).await
    }

    /// Traced dispatch shared by the server and [`Router::oneshot`].
    pub(crate) async fn dispatch(&self, parts: http::request::Parts, body: Bytes) -> Response {
        let method = parts.method.clone();
        let path = parts.uri.path().to_owned();
        trace::instrument(&method, &path, self.route(parts, body)).await
    }

    async fn route(&self, parts: http::request::Parts, body: Bytes) -> Response {
        let Ok(method) = Method::try_from(&parts.method) else {
            return Response::status(Status::MethodNotAllowed);
        };

        match self.lookup(method, parts.uri.path()) {
            Lookup::Found(endpoint, params) => {
                let response = endpoint(Request::new(method, &parts, body, params)).await;
                if method == Method::Head {
                    response.without_body()
                } else {
                    response
                }
            }
            Lookup::MethodNotAllowed(allowed) => {
                let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
                Response::builder()
                    .status(Status::MethodNotAllowed)
                    .header("allow", &allow)
                    .no_body()
            }
            Lookup::NotFound => Response::status(Status::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn ok(_req: Request) -> &'static str {
        "ok"
    }

    async fn echo_id(req: Request) -> String {
        req.param("id").unwrap_or("none").to_owned()
    }

    fn app() -> Router {
        Router::new()
            .get("/items", ok)
            .post("/items", ok)
            .get("/items/{id}", echo_id)
    }

    #[test]
    fn lookup_extracts_params() {
        match app().lookup(Method::Get, "/items/42") {
            Lookup::Found(_, params) => assert_eq!(params["id"], "42"),
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn lookup_lists_allowed_methods_in_order() {
        match app().lookup(Method::Delete, "/items") {
            Lookup::MethodNotAllowed(allowed) => {
                assert_eq!(allowed, vec![Method::Get, Method::Head, Method::Post]);
            }
            _ => panic!("expected 405"),
        }
    }

    #[test]
    fn lookup_unknown_path_is_not_found() {
        assert!(matches!(app().lookup(Method::Get, "/nope"), Lookup::NotFound));
    }

    #[tokio::test]
    async fn oneshot_runs_the_handler() {
        let req = http::Request::get("/items/7").body(Bytes::new()).unwrap();
        let response = app().oneshot(req).await;
        assert_eq!(response.status_code(), Status::Ok);
        assert_eq!(response.body(), b"7");
    }

    #[tokio::test]
    async fn oneshot_sets_allow_header_on_405() {
        let req = http::Request::put("/items").body(Bytes::new()).unwrap();
        let response = app().oneshot(req).await;
        assert_eq!(response.status_code(), Status::MethodNotAllowed);
        assert_eq!(response.header("allow"), Some("GET, HEAD, POST"));
    }

    #[tokio::test]
    async fn head_uses_the_get_route_without_a_body() {
        let req = http::Request::head("/items/42").body(Bytes::new()).unwrap();
        let response = app().oneshot(req).await;
        assert_eq!(response.status_code(), Status::Ok);
        assert!(response.body().is_empty());
        assert_eq!(response.header("content-length"), Some("2"));
        assert_eq!(response.header("content-type"), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn head_without_get_route_is_not_allowed() {
        match app().lookup(Method::Head, "/nope") {
            Lookup::NotFound => {}
            _ => panic!("expected 404"),
        }
    }

    #[tokio::test]
    async fn extension_methods_are_rejected() {
        let req = http::Request::builder()
            .method("PROPFIND")
            .uri("/items")
            .body(Bytes::new())
            .unwrap();
        let response = app().oneshot(req).await;
        assert_eq!(response.status_code(), Status::MethodNotAllowed);
    }
}
