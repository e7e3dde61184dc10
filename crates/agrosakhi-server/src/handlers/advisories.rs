//! Crop advisory handlers

use super::parse_id;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{Advisory, EntityId};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Advisory>>> {
    Ok(Json(state.storage.get_advisories().await?))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Advisory>> {
    let id = parse_id(path, "Advisory")?;
    state
        .storage
        .get_advisory(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Advisory"))
}
