//! Marketplace types

use crate::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Produce listed in the marketplace. Price is rupees per kg as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProduct {
    pub name: String,
    pub description: String,
    pub price: String,
}

/// Summary card of the farmer's market activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    pub last_sale: String,
    pub current_product: String,
    pub price: String,
    pub group_sale: GroupSale,
}

/// Collective sale organised by a farmer group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSale {
    pub title: String,
    pub description: String,
    pub participated: i32,
    pub total: i32,
}
