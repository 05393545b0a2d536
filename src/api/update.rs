use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::engine::Ack;
use crate::error::AppError;

/// Accepts `{"amount": <number>, "action": "spend" | "sale"}`.
///
/// The raw body is taken so that any malformed payload, including one that
/// is not JSON at all, is answered with `{"success": false, ...}`.
pub async fn post_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Ack>, AppError> {
    let ack = state.ingress.submit(&body)?;
    Ok(Json(ack))
}
