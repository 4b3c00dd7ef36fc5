//! Item entity - a titled record owned by exactly one user

use chrono::{DateTime, Utc};

/// A persisted item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Check if the item belongs to the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}

/// Values required to insert a new item row (the owner is supplied separately)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(title: String, description: Option<String>) -> Self {
        Self { title, description }
    }
}
