//! IoT device types

use crate::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of field device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Wearable band carried by the farmer
    Band,
    /// Fixed soil/weather station in the field
    Station,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Band => write!(f, "band"),
            DeviceKind::Station => write!(f, "station"),
        }
    }
}

/// A sensor device and its latest readings. Readings are display strings
/// ("42%", "32°C") as reported by the device firmware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: EntityId,
    pub user_id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub status: String,
    pub battery_level: Option<String>,
    pub soil_moisture: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    #[serde(rename = "soilPH")]
    pub soil_ph: Option<String>,
    pub pest_level: Option<String>,
    pub location: Option<String>,
    pub last_update: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDevice {
    pub user_id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub status: String,
    #[serde(default)]
    pub battery_level: Option<String>,
    #[serde(default)]
    pub soil_moisture: Option<String>,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default, rename = "soilPH")]
    pub soil_ph: Option<String>,
    #[serde(default)]
    pub pest_level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Partial device update, typically a fresh set of readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevicePatch {
    pub user_id: Option<EntityId>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<DeviceKind>,
    pub status: Option<String>,
    pub battery_level: Option<String>,
    pub soil_moisture: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    #[serde(rename = "soilPH")]
    pub soil_ph: Option<String>,
    pub pest_level: Option<String>,
    pub location: Option<String>,
    pub last_update: Option<String>,
}

impl DevicePatch {
    pub fn apply_to(self, device: &mut Device) {
        if let Some(user_id) = self.user_id {
            device.user_id = user_id;
        }
        if let Some(name) = self.name {
            device.name = name;
        }
        if let Some(kind) = self.kind {
            device.kind = kind;
        }
        if let Some(status) = self.status {
            device.status = status;
        }
        merge(&mut device.battery_level, self.battery_level);
        merge(&mut device.soil_moisture, self.soil_moisture);
        merge(&mut device.temperature, self.temperature);
        merge(&mut device.humidity, self.humidity);
        merge(&mut device.soil_ph, self.soil_ph);
        merge(&mut device.pest_level, self.pest_level);
        merge(&mut device.location, self.location);
        merge(&mut device.last_update, self.last_update);
    }
}

fn merge(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Per-device reading history as kept by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceHistory {
    pub device_id: EntityId,
    pub history: Vec<serde_json::Value>,
}

/// Hourly sensor series rendered by the dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceHistorySeries {
    pub timestamps: Vec<String>,
    pub soil_moisture: Vec<i32>,
    pub temperature: Vec<i32>,
    pub humidity: Vec<i32>,
}
