//! Marketplace handlers

use super::parse_id;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use agrosakhi_core::{EntityId, MarketInfo, Product};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

pub async fn info(State(state): State<AppState>) -> ApiResult<Json<MarketInfo>> {
    state
        .storage
        .get_market_info()
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Market info"))
}

pub async fn products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.storage.get_products().await?))
}

pub async fn product(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(path, "Product")?;
    state
        .storage
        .get_product(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Product"))
}
