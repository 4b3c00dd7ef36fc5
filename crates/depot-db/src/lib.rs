//! # depot-db
//!
//! Database layer for users and items, backed by PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Idempotent schema bootstrap (`CREATE TABLE IF NOT EXISTS`)
//! - Request-scoped sessions that return their connection to the pool on drop
//! - Row models with SQLx `FromRow` derives and model -> entity mappers
//! - Repositories that run exactly one statement per operation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use depot_db::{create_pool, ensure_schema, Database, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!
//!     let database = Database::new(pool);
//!     let mut session = database.session().await?;
//!     let user = session.users().find_by_id(1).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod session;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, PgPool, PoolConfig};
pub use repositories::{PgItemRepository, PgUserRepository, RepoResult};
pub use schema::ensure_schema;
pub use session::{Database, Session};
