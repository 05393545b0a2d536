use axum::extract::State;
use axum::response::Html;

use crate::api::AppState;
use crate::engine::render;

pub async fn get_overlay(State(state): State<AppState>) -> Html<String> {
    Html(render(&state.overlay.snapshot(), state.refresh_secs))
}
