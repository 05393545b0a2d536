pub mod health;
pub mod overlay;
pub mod status;
pub mod update;

use crate::domain::WalletAddress;
use crate::engine::{OverlayState, TransactionIngress, DEFAULT_REFRESH_SECS};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub overlay: Arc<OverlayState>,
    pub ingress: TransactionIngress,
    pub address: WalletAddress,
    pub refresh_secs: u32,
}

impl AppState {
    pub fn new(overlay: Arc<OverlayState>, address: WalletAddress) -> Self {
        Self {
            ingress: TransactionIngress::new(overlay.clone()),
            overlay,
            address,
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }

    /// Seconds between overlay page reloads; zero disables reloading.
    pub fn with_refresh_secs(mut self, refresh_secs: u32) -> Self {
        self.refresh_secs = refresh_secs;
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(overlay::get_overlay))
        .route("/update", post(update::post_update))
        .route("/status", get(status::get_status))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
