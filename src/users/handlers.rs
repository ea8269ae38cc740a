use axum::Json;

use crate::dto::MsgResponse;

/// Placeholder endpoint; it does not read the user table.
pub async fn hello_user() -> Json<MsgResponse> {
    Json(MsgResponse::new("Hello, this is your GET /user response "))
}
