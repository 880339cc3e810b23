//! Liveness and status endpoints.

use axum::extract::State;
use vidhi_core::Language;

use crate::AppState;

/// GET /health – liveness only; never touches the knowledge base.
pub(crate) async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "healthy" }))
}

/// GET /v1/status – app identity and what the knowledge base holds.
pub(crate) async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    let languages: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
    let coverage: serde_json::Map<String, serde_json::Value> = Language::all()
        .iter()
        .map(|l| (l.code().to_string(), state.knowledge.coverage(*l).into()))
        .collect();
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "cases": state.knowledge.len(),
        "languages": languages,
        "coverage": coverage,
    }))
}
