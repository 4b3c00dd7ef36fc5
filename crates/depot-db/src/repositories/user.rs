//! PostgreSQL user repository

use sqlx::PgConnection;
use tracing::instrument;

use depot_core::{NewUser, User};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};
use super::RepoResult;

/// Projection shared by every user read; embeds the user's items ordered by id.
const USER_COLUMNS: &str = r"
    u.id, u.email, u.username, u.is_active, u.created_at, u.updated_at,
    (
        SELECT COALESCE(json_agg(row_to_json(i) ORDER BY i.id), '[]'::json)
        FROM (
            SELECT id, title, description, owner_id, created_at, updated_at
            FROM items
            WHERE owner_id = u.id
        ) i
    ) AS items
";

/// PostgreSQL user repository bound to a session's connection
pub struct PgUserRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgUserRepository<'c> {
    /// Create a repository over a borrowed connection
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Fetch a user by primary key
    #[instrument(skip(self))]
    pub async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users u WHERE u.id = $1");
        let result = sqlx::query_as::<_, UserModel>(&query)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    /// Fetch a user by exact email
    #[instrument(skip(self))]
    pub async fn find_by_email(&mut self, email: &str) -> RepoResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users u WHERE u.email = $1");
        let result = sqlx::query_as::<_, UserModel>(&query)
            .bind(email)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    /// List users ordered by id
    #[instrument(skip(self))]
    pub async fn list(&mut self, skip: i64, limit: i64) -> RepoResult<Vec<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users u ORDER BY u.id OFFSET $1 LIMIT $2");
        let rows = sqlx::query_as::<_, UserModel>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Insert a user and return the stored row
    #[instrument(skip(self, new_user), fields(email = %new_user.email, username = %new_user.username))]
    pub async fn create(&mut self, new_user: &NewUser) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, username, hashed_password)
            VALUES ($1, $2, $3)
            RETURNING id, email, username, is_active, created_at, updated_at,
                      '[]'::json AS items
            ",
        )
        .bind(&new_user.email)
        .bind(&new_user.username)
        .bind(&new_user.hashed_password)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(map_unique_violation)?;

        Ok(User::from(row))
    }
}
