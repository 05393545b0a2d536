use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;

/// Liveness: the process is serving requests.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Readiness: routes are only mounted once the overlay is Active, so this
/// always reports ready and adds whether a ledger figure has landed yet.
pub async fn ready(State(state): State<AppState>) -> Json<Value> {
    let reconciled = state.overlay.stats().reconciliations > 0;
    Json(json!({"status": "ready", "reconciled": reconciled}))
}
