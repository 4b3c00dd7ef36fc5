//! User database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use super::ItemModel;

/// Database model for users table joined with the user's items.
///
/// `hashed_password` is never selected.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub items: Json<Vec<ItemModel>>,
}
