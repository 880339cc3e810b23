//! `POST /ask`: answers a legal question from the knowledge base.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vidhi_core::{resolve, Language};

use crate::error::ApiError;
use crate::AppState;

/// Form body sent by the landing page.
#[derive(Debug, Deserialize)]
pub(crate) struct AskForm {
    query: String,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AskResponse {
    response: String,
}

pub(crate) async fn ask(
    State(state): State<AppState>,
    form: Result<Form<AskForm>, FormRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Form(form) = form?;
    let language_code = form
        .language
        .as_deref()
        .filter(|code| !code.trim().is_empty())
        .unwrap_or(Language::default().code());

    let request_id = uuid::Uuid::new_v4();
    let resolution = resolve(&state.knowledge, &form.query, language_code);
    if Language::from_code(language_code).is_none() {
        tracing::debug!(%request_id, requested = language_code, "Unknown language, answering in English");
    }
    tracing::info!(
        %request_id,
        query_chars = form.query.chars().count(),
        language = resolution.language.code(),
        case = ?resolution.case_index,
        "Question answered"
    );

    Ok(Json(AskResponse {
        response: resolution.text.to_string(),
    }))
}
