//! User entity - an account that owns items

use chrono::{DateTime, Utc};

use super::item::Item;

/// A persisted user account.
///
/// The password hash never leaves the persistence layer, so it is not part of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// `None` until the row is first updated
    pub updated_at: Option<DateTime<Utc>>,
    /// Items owned by this user, ordered by id
    pub items: Vec<Item>,
}

impl User {
    /// Check if the user has never been updated since creation
    #[inline]
    pub fn is_pristine(&self) -> bool {
        self.updated_at.is_none()
    }

    /// Number of items owned by the user
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Values required to insert a new user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
}

impl NewUser {
    /// Create a new user payload from an already hashed password
    pub fn new(email: String, username: String, hashed_password: String) -> Self {
        Self {
            email,
            username,
            hashed_password,
        }
    }
}
