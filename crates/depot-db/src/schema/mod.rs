//! Schema bootstrap
//!
//! Creates the tables and indexes when they are missing. Existing tables are left
//! untouched; there is no migration logic.

use sqlx::PgPool;
use tracing::{debug, info};

/// DDL statements, executed in order
const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS users (
        id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        email VARCHAR(255) NOT NULL,
        username VARCHAR(100) NOT NULL,
        hashed_password VARCHAR(255) NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NULL,
        CONSTRAINT users_email_key UNIQUE (email),
        CONSTRAINT users_username_key UNIQUE (username)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS items (
        id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        description TEXT NULL,
        owner_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_items_title ON items (title)",
    "CREATE INDEX IF NOT EXISTS idx_items_owner_id ON items (owner_id)",
];

/// Create all tables and indexes that do not exist yet
///
/// # Errors
/// Returns the first statement failure
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Creating database tables...");

    for statement in SCHEMA {
        debug!(statement = statement.trim(), "Executing DDL");
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database tables created successfully");
    Ok(())
}
