//! Voice assistant and AI advisory payloads

use serde::{Deserialize, Serialize};

/// Transcript captured by the browser speech recogniser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceRequest {
    pub transcript: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceResponse {
    pub response: String,
    pub recommendations: Vec<Recommendation>,
}

/// Follow-up suggestion attached to a voice answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Recommendation {
    Task { title: String },
    Weather { alert: String },
}

/// Result of a crop photo analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub result: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherPredictionRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPrediction {
    pub forecast: Vec<ForecastDay>,
    pub advisories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub temperature: TemperatureRange,
    pub condition: String,
    /// Millimetres
    pub rainfall: u32,
    /// Percent
    pub humidity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilAnalysis {
    pub result: String,
    pub metrics: SoilMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilMetrics {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub organic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketForecastRequest {
    pub crop: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

impl PriceTrend {
    pub fn between(current: i32, forecast: i32) -> Self {
        match forecast.cmp(&current) {
            std::cmp::Ordering::Greater => PriceTrend::Up,
            std::cmp::Ordering::Less => PriceTrend::Down,
            std::cmp::Ordering::Equal => PriceTrend::Stable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketForecast {
    pub current_price: i32,
    pub forecasted_price: i32,
    pub recommendation: String,
    pub trend: PriceTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropQueryRequest {
    pub transcript: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropQueryResponse {
    pub response: String,
    pub suggested_actions: Vec<String>,
}
