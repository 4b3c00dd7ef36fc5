//! Item database model

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

/// Database model for items table
///
/// Also decoded from the `json_agg` output embedded in user rows.
#[derive(Debug, Clone, FromRow, Deserialize)]
pub struct ItemModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
