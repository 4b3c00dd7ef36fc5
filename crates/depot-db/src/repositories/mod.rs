//! Repository implementations
//!
//! Repositories borrow the connection of a [`Session`](crate::Session) and run
//! exactly one statement per operation.

pub(crate) mod error;
mod item;
mod user;

use depot_core::DomainError;

pub use item::PgItemRepository;
pub use user::PgUserRepository;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;
