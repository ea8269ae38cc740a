use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;

/// Structured API failure: rendered as `{...payload, "message": ...}` with its own status.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiException {
    pub message: String,
    pub status_code: StatusCode,
    pub payload: Option<Map<String, Value>>,
}

impl ApiException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            payload: None,
        }
    }

    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn to_body(&self) -> Value {
        let mut body = self.payload.clone().unwrap_or_default();
        body.insert("message".into(), Value::String(self.message.clone()));
        Value::Object(body)
    }
}

impl IntoResponse for ApiException {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.to_body())).into_response()
    }
}

/// Every failure a handler can produce. Only `Api` is translated into a
/// structured body; the rest collapse into an opaque 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiException),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("malformed request body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("no {0} row matched the requested keys")]
    MissingRow(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Api(e) => e.into_response(),
            other => {
                error!(error = %other, "unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
