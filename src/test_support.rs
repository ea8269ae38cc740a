//! Helpers for driving the full app in unit tests.

use std::convert::Infallible;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
};
use tower::{Service, ServiceExt};

use crate::{app::build_app, state::AppState};

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("json body")
    }
}

/// Sends one request through any service that answers like an axum router.
pub async fn call<S>(svc: S, method: Method, uri: &str, body: Option<&str>) -> TestResponse
where
    S: Service<Request<Body>, Response = Response, Error = Infallible>,
{
    let mut req = Request::builder().method(method).uri(uri);
    if body.is_some() {
        req = req.header("content-type", "application/json");
    }
    let req = req
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .expect("request");

    let resp = svc.oneshot(req).await.expect("infallible");
    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    TestResponse {
        status,
        content_type,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn send(state: &AppState, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    call(build_app(state.clone()), method, uri, body).await
}

pub async fn get(state: &AppState, uri: &str) -> TestResponse {
    send(state, Method::GET, uri, None).await
}

pub async fn get_from<S>(svc: S, uri: &str) -> TestResponse
where
    S: Service<Request<Body>, Response = Response, Error = Infallible>,
{
    call(svc, Method::GET, uri, None).await
}
