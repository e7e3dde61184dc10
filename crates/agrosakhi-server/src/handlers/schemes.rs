//! Government scheme handlers

use super::parse_id;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{EntityId, Scheme};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Scheme>>> {
    Ok(Json(state.storage.get_schemes().await?))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Scheme>> {
    let id = parse_id(path, "Scheme")?;
    state
        .storage
        .get_scheme(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Scheme"))
}
