//! HTTP handlers

pub mod advisories;
pub mod ai;
pub mod courses;
pub mod devices;
pub mod health;
pub mod market;
pub mod schemes;
pub mod tasks;
pub mod users;
pub mod voice;
pub mod weather;

pub use health::health;

use crate::error::{ApiError, ApiResult};
use agrosakhi_core::EntityId;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};
use tracing::warn;

/// Unwrap a JSON body, turning any rejection into a 400 for `entity`
pub(crate) fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    entity: &'static str,
) -> ApiResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!(entity, "Rejected request body: {}", rejection.body_text());
            Err(ApiError::InvalidData(entity))
        }
    }
}

/// Ids that do not parse can never match a record
pub(crate) fn parse_id(
    path: Result<Path<EntityId>, PathRejection>,
    entity: &'static str,
) -> ApiResult<EntityId> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound(entity))
}
