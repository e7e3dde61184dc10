//! Learning course handlers

use super::parse_id;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{Course, EntityId};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Course>>> {
    Ok(Json(state.storage.get_courses().await?))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Course>> {
    let id = parse_id(path, "Course")?;
    state
        .storage
        .get_course(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Course"))
}

pub async fn current(State(state): State<AppState>) -> ApiResult<Json<Course>> {
    state
        .storage
        .get_current_course()
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Current course"))
}
