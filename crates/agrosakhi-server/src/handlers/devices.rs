//! Device handlers

use super::{parse_body, parse_id};
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{Device, DeviceHistory, DeviceHistorySeries, DevicePatch, EntityId};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Device>>> {
    let devices = state
        .storage
        .get_devices(state.config.demo_user_id)
        .await?;
    Ok(Json(devices))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Device>> {
    let id = parse_id(path, "Device")?;
    state
        .storage
        .get_device(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Device"))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
    payload: Result<Json<DevicePatch>, JsonRejection>,
) -> ApiResult<Json<Device>> {
    let id = parse_id(path, "Device")?;
    let patch = parse_body(payload, "device")?;
    state
        .storage
        .update_device(id, patch)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Device"))
}

pub async fn device_history(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<DeviceHistory>> {
    let id = parse_id(path, "Device")?;
    state
        .storage
        .get_device_history(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Device"))
}

#[derive(Debug, serde::Serialize)]
pub struct HistoryResponse {
    history: DeviceHistorySeries,
}

/// Hourly readings for the dashboard chart. There is no time-series store
/// behind this yet; the series is fixed.
pub async fn history() -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: DeviceHistorySeries {
            timestamps: ["10:00", "11:00", "12:00", "13:00", "14:00"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            soil_moisture: vec![40, 42, 45, 44, 42],
            temperature: vec![30, 31, 32, 33, 32],
            humidity: vec![65, 64, 68, 70, 68],
        },
    })
}
