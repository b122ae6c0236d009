//! Axum route handlers for the Headlines API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::headlines::generator::{generate_headlines, HeadlineBatch, HeadlineRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of `POST /api/generate`. Identity fields are only used for authorization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHeadlinesRequest {
    pub keyword: Option<String>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateHeadlinesResponse {
    pub success: bool,
    #[serde(flatten)]
    pub batch: HeadlineBatch,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// identity → keyword → credential → provider call → normalize + score.
/// Returns exactly three scored headlines or an error; never a partial result.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateHeadlinesRequest>, JsonRejection>,
) -> Result<Json<GenerateHeadlinesResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation {
        message: "Invalid request body".to_string(),
        details: Some(rejection.body_text()),
    })?;

    let caller = state
        .identity
        .verify(request.user_id.as_deref(), request.user_email.as_deref())
        .await?;

    let headline_request = HeadlineRequest::parse(request.keyword.as_deref())?;

    let provider = state
        .provider
        .as_deref()
        .ok_or_else(|| AppError::Configuration("AI API key not configured".to_string()))?;

    info!(
        "Generating headlines for user {} (keyword {:?})",
        caller.user_id,
        headline_request.keyword()
    );

    let batch = generate_headlines(provider, &headline_request)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(GenerateHeadlinesResponse {
        success: true,
        batch,
    }))
}
