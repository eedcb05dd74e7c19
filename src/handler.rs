use std::sync::Arc;

use axum::{Json, response::IntoResponse};
use serde_json::json;
use tracing::info;

use crate::store::BookmarkStore;

/// Shared handler state. The store sits behind a trait object so the
/// memory and sqlite backends are interchangeable at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookmarkStore>,
    pub api_token: Arc<String>,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(json!({ "status": "ok" }))
}
