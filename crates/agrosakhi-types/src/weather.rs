//! Weather types

use crate::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Id of the single weather record
pub const WEATHER_ID: EntityId = 1;

/// Current local weather. There is only ever one record; an update replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub id: EntityId,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind: String,
    pub rainfall: String,
    pub alert: Option<String>,
    pub updated: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWeather {
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind: String,
    pub rainfall: String,
    #[serde(default)]
    pub alert: Option<String>,
    pub updated: String,
}
