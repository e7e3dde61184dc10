//! Weather handlers

use super::parse_body;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{InsertWeather, Weather};
use axum::{extract::rejection::JsonRejection, extract::State, Json};

pub async fn get(State(state): State<AppState>) -> ApiResult<Json<Weather>> {
    state
        .storage
        .get_weather()
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Weather"))
}

pub async fn replace(
    State(state): State<AppState>,
    payload: Result<Json<InsertWeather>, JsonRejection>,
) -> ApiResult<Json<Weather>> {
    let weather = parse_body(payload, "weather")?;
    Ok(Json(state.storage.update_weather(weather).await?))
}
