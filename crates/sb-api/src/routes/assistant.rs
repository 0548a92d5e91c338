//! Assistant endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use sb_assistant::AssistantError;
use sb_protocol::{Answer, AskRequest};

use crate::error::{ApiError, ApiResult, PROCESSING_FAILED};
use crate::state::AppState;

/// POST /api/v1/assistant: answer a question with full metadata.
pub async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> ApiResult<Json<Answer>> {
    let Json(req) = body?;
    let answer = state.assistant.submit(req.question()).await?;
    tracing::info!(
        answer_id = %answer.id,
        source = ?answer.source,
        latency_ms = answer.latency_ms,
        "assistant answered"
    );
    Ok(Json(answer))
}

/// Response body of the page's original assistant route.
#[derive(Debug, Serialize)]
pub struct LegacyAnswer {
    pub response: String,
}

/// POST /api/openai: route the existing page calls; returns only the text.
///
/// Classification failures are reported as 500 here, as the page expects.
pub async fn ask_legacy(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> ApiResult<Json<LegacyAnswer>> {
    let Json(req) = body?;
    let answer = state.assistant.submit(req.question()).await.map_err(|e| match e {
        AssistantError::ExternalService(_) => ApiError::Internal(PROCESSING_FAILED.into()),
        other => other.into(),
    })?;
    Ok(Json(LegacyAnswer {
        response: answer.response,
    }))
}
