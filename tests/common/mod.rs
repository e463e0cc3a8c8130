// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use ledger_api::LedgerService;
use ledger_api::api;
use ledger_api::domain::AmountInput;
use serde_json::Value;
use tower::ServiceExt;

pub const ACCOUNT_ID: &str = "1234567890";

/// Helper to create a fresh, empty service
pub fn test_service() -> LedgerService {
    LedgerService::default()
}

/// Helper to create a service with one account already open
pub async fn service_with_account(id: &str, balance: i64) -> Result<LedgerService> {
    let service = test_service();
    service
        .create_account(id, Some(&AmountInput::from(balance)))
        .await?;
    Ok(service)
}

/// Helper to build the HTTP router around a fresh service
pub fn test_app() -> Router {
    api::router(Arc::new(test_service()))
}

/// Status code and parsed JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Send one request through the router and collect the JSON response
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Result<TestResponse> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => request.body(Body::empty())?,
    };
    send_request(app, request).await
}

/// Send a pre-built request through the router
pub async fn send_request(app: &Router, request: Request<Body>) -> Result<TestResponse> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok(TestResponse { status, body })
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Result<TestResponse> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> Result<TestResponse> {
    send(app, Method::GET, uri, None).await
}
