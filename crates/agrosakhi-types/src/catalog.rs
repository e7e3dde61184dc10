//! Read-mostly content: crop advisories, learning courses and government schemes

use crate::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Positive,
    Warning,
    Alert,
}

/// Crop advisory card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AdvisoryKind,
    pub has_video: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAdvisory {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AdvisoryKind,
    #[serde(default)]
    pub has_video: bool,
}

/// Learning course in the academy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub level: i32,
    /// Completion percentage, 0..=100
    pub progress: i32,
    pub lessons: i32,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCourse {
    pub title: String,
    pub description: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub progress: i32,
    #[serde(default = "default_lessons")]
    pub lessons: i32,
    #[serde(default)]
    pub icon: Option<String>,
}

fn default_level() -> i32 {
    1
}

fn default_lessons() -> i32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeStatus {
    /// Applications are being accepted
    Open,
    /// The farmer already qualifies
    Eligible,
}

/// Government support scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub status: SchemeStatus,
    pub status_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertScheme {
    pub title: String,
    pub description: String,
    pub status: SchemeStatus,
    pub status_text: String,
}
