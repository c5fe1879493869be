//! End-to-end tests of every endpoint, driven through `Router::oneshot`.

use bytes::Bytes;
use demo_api::{Response, Status, api};
use serde_json::{Value, json};

async fn get(uri: &str) -> Response {
    let req = http::Request::get(uri).body(Bytes::new()).unwrap();
    api::router().oneshot(req).await
}

async fn post_json(uri: &str, body: &str) -> Response {
    let req = http::Request::post(uri)
        .header("content-type", "application/json")
        .body(Bytes::from(body.to_owned()))
        .unwrap();
    api::router().oneshot(req).await
}

fn json_body(response: &Response) -> Value {
    serde_json::from_slice(response.body()).expect("response body is JSON")
}

// ── Health ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_is_up() {
    let response = get("/api/health").await;
    assert_eq!(response.status_code(), Status::Ok);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(
        json_body(&response),
        json!({"status": "UP", "message": "Application is running successfully"})
    );
}

#[tokio::test]
async fn health_is_deterministic() {
    let first = get("/api/health").await;
    let second = get("/api/health").await;
    assert_eq!(first.body(), second.body());
}

// ── Echo ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn echo_returns_message_and_timestamp() {
    let response = post_json("/api/echo", r#"{"message":"Hello Copilot"}"#).await;
    assert_eq!(response.status_code(), Status::Ok);

    let body = json_body(&response);
    assert_eq!(body["message"], "Hello Copilot");
    assert!(body["timestamp"].as_i64().is_some_and(|t| t > 0));
}

#[tokio::test]
async fn echo_timestamps_do_not_go_backwards() {
    let first = json_body(&post_json("/api/echo", r#"{"message":"one"}"#).await);
    let second = json_body(&post_json("/api/echo", r#"{"message":"two"}"#).await);
    assert!(second["timestamp"].as_i64() >= first["timestamp"].as_i64());
}

#[tokio::test]
async fn echo_rejects_empty_message() {
    let response = post_json("/api/echo", r#"{"message":""}"#).await;
    assert_eq!(response.status_code(), Status::BadRequest);
    assert_eq!(response.header("content-type"), Some("application/problem+json"));

    let body = json_body(&response);
    assert_eq!(body["type"], "/problems/invalid-argument");
    assert_eq!(body["status"], 400);
    assert_eq!(body["detail"], "Message cannot be empty");
}

#[tokio::test]
async fn echo_rejects_missing_or_null_message() {
    for body in ["{}", r#"{"message":null}"#] {
        let response = post_json("/api/echo", body).await;
        assert_eq!(response.status_code(), Status::BadRequest, "body: {body}");
        assert_eq!(json_body(&response)["type"], "/problems/invalid-argument");
    }
}

#[tokio::test]
async fn echo_rejects_malformed_bodies() {
    for body in ["", "not json", r#"{"message":42}"#, "[]"] {
        let response = post_json("/api/echo", body).await;
        assert_eq!(response.status_code(), Status::BadRequest, "body: {body}");
        assert_eq!(json_body(&response)["type"], "/problems/bad-request");
    }
}

#[tokio::test]
async fn echo_ignores_unknown_fields() {
    let response = post_json("/api/echo", r#"{"message":"hi","extra":true}"#).await;
    assert_eq!(response.status_code(), Status::Ok);
    assert_eq!(json_body(&response)["message"], "hi");
}

// ── Calculations ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn sum_of_five_and_three() {
    let response = get("/api/calculate/sum?a=5&b=3").await;
    assert_eq!(response.status_code(), Status::Ok);
    assert_eq!(
        json_body(&response),
        json!({"operand1": 5, "operand2": 3, "result": 8, "operation": "sum"})
    );
}

#[tokio::test]
async fn product_of_five_and_three() {
    let response = get("/api/calculate/product?a=5&b=3").await;
    assert_eq!(
        json_body(&response),
        json!({"operand1": 5, "operand2": 3, "result": 15, "operation": "product"})
    );
}

#[tokio::test]
async fn divide_fifteen_by_three() {
    let response = get("/api/calculate/divide?a=15&b=3").await;
    assert_eq!(
        json_body(&response),
        json!({"operand1": 15, "operand2": 3, "result": 5, "operation": "divide"})
    );
}

#[tokio::test]
async fn divide_by_zero_is_bad_request() {
    let response = get("/api/calculate/divide?a=10&b=0").await;
    assert_eq!(response.status_code(), Status::BadRequest);

    let body = json_body(&response);
    assert_eq!(body["type"], "/problems/invalid-argument");
    assert_eq!(body["detail"], "Cannot divide by zero");
}

#[tokio::test]
async fn sum_with_negative_operand() {
    let response = get("/api/calculate/sum?a=-5&b=3").await;
    assert_eq!(response.status_code(), Status::Ok);
    assert_eq!(json_body(&response)["result"], -2);
}

#[tokio::test]
async fn product_with_zero() {
    let response = get("/api/calculate/product?a=5&b=0").await;
    assert_eq!(response.status_code(), Status::Ok);
    assert_eq!(json_body(&response)["result"], 0);
}

#[tokio::test]
async fn sum_wraps_on_overflow() {
    let response = get("/api/calculate/sum?a=2147483647&b=1").await;
    assert_eq!(json_body(&response)["result"], i32::MIN);
}

#[tokio::test]
async fn calculation_params_are_validated() {
    for uri in [
        "/api/calculate/sum",
        "/api/calculate/sum?a=5",
        "/api/calculate/product?a=x&b=1",
        "/api/calculate/divide?a=1.5&b=1",
        "/api/calculate/sum?a=2147483648&b=0",
    ] {
        let response = get(uri).await;
        assert_eq!(response.status_code(), Status::BadRequest, "uri: {uri}");
        assert_eq!(json_body(&response)["type"], "/problems/bad-request");
    }
}

#[tokio::test]
async fn calculation_params_are_percent_decoded() {
    let response = get("/api/calculate/sum?a=%2D5&b=3").await;
    assert_eq!(json_body(&response)["result"], -2);
}

// ── Greetings ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn greetings_are_plain_text() {
    for (uri, text) in [
        ("/", api::greeting::HOME_GREETING),
        ("/hello", api::greeting::HELLO_GREETING),
    ] {
        let response = get(uri).await;
        assert_eq!(response.status_code(), Status::Ok);
        assert_eq!(response.header("content-type"), Some("text/plain; charset=utf-8"));
        assert_eq!(response.body(), text.as_bytes());
    }
}

#[tokio::test]
async fn home_greeting_text() {
    let response = get("/").await;
    assert_eq!(response.body(), "Hello World from Spring Boot 🚀".as_bytes());

    let response = get("/hello").await;
    assert_eq!(response.body(), b"Hello from /hello endpoint");
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = get("/api/nope").await;
    assert_eq!(response.status_code(), Status::NotFound);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let response = get("/api/echo").await;
    assert_eq!(response.status_code(), Status::MethodNotAllowed);
    assert_eq!(response.header("allow"), Some("POST"));

    let response = post_json("/api/health", "{}").await;
    assert_eq!(response.status_code(), Status::MethodNotAllowed);
    assert_eq!(response.header("allow"), Some("GET, HEAD"));
}

#[tokio::test]
async fn head_health_has_headers_but_no_body() {
    let req = http::Request::head("/api/health").body(Bytes::new()).unwrap();
    let response = api::router().oneshot(req).await;
    let full = get("/api/health").await;

    assert_eq!(response.status_code(), Status::Ok);
    assert!(response.body().is_empty());
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(
        response.header("content-length"),
        Some(full.body().len().to_string().as_str())
    );
}
