//! User types

use crate::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Farmer account shown on the dashboard profile card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    /// Never sent back over the wire
    #[serde(skip_serializing, default)]
    pub password: String,
    pub location: Option<String>,
    pub level: i32,
    pub points: i32,
    pub total_harvest: i32,
    pub total_earnings: i32,
    pub completed_courses: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a user. Progress counters are always
/// initialised by the engine, so they are not part of this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub location: Option<String>,
    pub level: Option<i32>,
    pub points: Option<i32>,
    pub total_harvest: Option<i32>,
    pub total_earnings: Option<i32>,
    pub completed_courses: Option<i32>,
}

impl UserPatch {
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(location) = self.location {
            user.location = Some(location);
        }
        if let Some(level) = self.level {
            user.level = level;
        }
        if let Some(points) = self.points {
            user.points = points;
        }
        if let Some(total_harvest) = self.total_harvest {
            user.total_harvest = total_harvest;
        }
        if let Some(total_earnings) = self.total_earnings {
            user.total_earnings = total_earnings;
        }
        if let Some(completed_courses) = self.completed_courses {
            user.completed_courses = completed_courses;
        }
    }
}
