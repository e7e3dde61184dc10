//! User handlers

use super::parse_body;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{InsertUser, User, UserPatch};
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::info;

/// The dashboard's signed-in user
pub async fn me(State(state): State<AppState>) -> ApiResult<Json<User>> {
    state
        .storage
        .get_user(state.config.demo_user_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InsertUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let insert = parse_body(payload, "user")?;
    let username = insert.username.clone();

    let Some(user) = state.storage.register_user(insert).await? else {
        info!(username = %username, "Rejected duplicate username");
        return Err(ApiError::Conflict("Username already exists".to_string()));
    };
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let patch = parse_body(payload, "user")?;
    state
        .storage
        .update_user(state.config.demo_user_id, patch)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}
