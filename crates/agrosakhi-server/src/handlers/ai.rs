//! AI advisory handlers
//!
//! Image, soil, weather and market analyses are simulated; see
//! [`crate::services::assistant`].

use super::parse_body;
use crate::error::ApiResult;
use crate::services::assistant;
use crate::AppState;
use agrosakhi_core::{
    CropQueryRequest, CropQueryResponse, ImageAnalysis, Language, MarketForecast,
    MarketForecastRequest, SoilAnalysis, WeatherPrediction, WeatherPredictionRequest,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use tracing::{debug, info};

/// The uploaded image is not inspected.
pub async fn analyze_image() -> Json<ImageAnalysis> {
    let analysis = assistant::analyze_image(&mut rand::thread_rng());
    info!(confidence = analysis.confidence, "Simulated crop image analysis");
    Json(analysis)
}

pub async fn analyze_soil() -> Json<SoilAnalysis> {
    Json(assistant::analyze_soil())
}

/// A missing or unreadable body falls back to the default week-long forecast.
pub async fn predict_weather(
    payload: Result<Json<WeatherPredictionRequest>, JsonRejection>,
) -> Json<WeatherPrediction> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Unreadable forecast request, using defaults: {}", rejection.body_text());
            WeatherPredictionRequest::default()
        }
    };
    info!(location = ?request.location, days = ?request.days, "Simulated weather prediction");

    let today = Utc::now().date_naive();
    Json(assistant::predict_weather(
        &mut rand::thread_rng(),
        today,
        request.days,
    ))
}

pub async fn forecast_market(
    payload: Result<Json<MarketForecastRequest>, JsonRejection>,
) -> ApiResult<Json<MarketForecast>> {
    let request = parse_body(payload, "market forecast")?;
    Ok(Json(assistant::forecast_market(
        &mut rand::thread_rng(),
        &request.crop,
    )))
}

pub async fn crop_query(
    State(state): State<AppState>,
    payload: Result<Json<CropQueryRequest>, JsonRejection>,
) -> ApiResult<Json<CropQueryResponse>> {
    let request = parse_body(payload, "crop query")?;
    let language = Language::from_code(request.language.as_deref());
    Ok(Json(
        state
            .assistant
            .crop_query(&request.transcript, language)
            .await,
    ))
}
