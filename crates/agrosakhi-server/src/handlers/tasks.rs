//! Task handlers

use super::{parse_body, parse_id};
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{EntityId, InsertTask, Task};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::error;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.storage.get_tasks(state.config.demo_user_id).await?;
    Ok(Json(tasks))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InsertTask>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let insert = parse_body(payload, "task")?;
    let task = state.storage.create_task(insert).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Task>> {
    let id = parse_id(path, "Task")?;
    state
        .storage
        .get_task(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Task"))
}

pub async fn start(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Task>> {
    let id = parse_id(path, "Task")?;
    match state.storage.start_task(id).await {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(ApiError::NotFound("Task")),
        Err(e) => {
            error!(id, "Failed to start task: {}", e);
            Err(ApiError::Failed("Failed to start task"))
        }
    }
}
