//! Error handling utilities for repositories

use depot_core::DomainError;
use sqlx::Error as SqlxError;

/// Unique constraint on `users.email`
pub const USERS_EMAIL_KEY: &str = "users_email_key";
/// Unique constraint on `users.username`
pub const USERS_USERNAME_KEY: &str = "users_username_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the users table to the matching conflict error
pub fn map_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(USERS_USERNAME_KEY) => DomainError::UsernameAlreadyExists,
                _ => DomainError::EmailAlreadyExists,
            };
        }
    }
    map_db_error(e)
}

/// Map a foreign key violation on `items.owner_id` to a missing owner
pub fn map_owner_violation(e: SqlxError, owner_id: i64) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return DomainError::UserNotFound(owner_id);
        }
    }
    map_db_error(e)
}
