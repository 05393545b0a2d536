use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub address: String,
    pub balance: String,
    pub pnl: String,
    pub events_applied: u64,
    pub events_ignored: u64,
    pub reconciliations: u64,
    pub last_reconciled_at: Option<DateTime<Utc>>,
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let (snapshot, stats) = state.overlay.snapshot_with_stats();

    Json(StatusResponse {
        address: state.address.to_string(),
        balance: snapshot.balance.to_canonical_string(),
        pnl: snapshot.pnl.to_canonical_string(),
        events_applied: stats.events_applied,
        events_ignored: stats.events_ignored,
        reconciliations: stats.reconciliations,
        last_reconciled_at: stats.last_reconciled_at,
    })
}
