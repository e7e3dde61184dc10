//! Voice assistant handler

use super::parse_body;
use crate::error::ApiResult;
use crate::AppState;
use agrosakhi_core::{Language, VoiceRequest, VoiceResponse};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<VoiceRequest>, JsonRejection>,
) -> ApiResult<Json<VoiceResponse>> {
    let request = parse_body(payload, "voice request")?;
    let language = Language::from_code(request.language.as_deref());
    info!(%language, chars = request.transcript.chars().count(), "Voice query");

    Ok(Json(
        state.assistant.voice(&request.transcript, language).await,
    ))
}
