//! PostgreSQL item repository

use sqlx::PgConnection;
use tracing::instrument;

use depot_core::{Item, NewItem};

use crate::models::ItemModel;

use super::error::{map_db_error, map_owner_violation};
use super::RepoResult;

/// PostgreSQL item repository bound to a session's connection
pub struct PgItemRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgItemRepository<'c> {
    /// Create a repository over a borrowed connection
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List items across all owners, ordered by id
    #[instrument(skip(self))]
    pub async fn list(&mut self, skip: i64, limit: i64) -> RepoResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, title, description, owner_id, created_at, updated_at
            FROM items
            ORDER BY id
            OFFSET $1 LIMIT $2
            ",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Insert an item for the given owner
    #[instrument(skip(self, new_item), fields(title = %new_item.title))]
    pub async fn create_for_owner(&mut self, new_item: &NewItem, owner_id: i64) -> RepoResult<Item> {
        let row = sqlx::query_as::<_, ItemModel>(
            r"
            INSERT INTO items (title, description, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, owner_id, created_at, updated_at
            ",
        )
        .bind(&new_item.title)
        .bind(&new_item.description)
        .bind(owner_id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_owner_violation(e, owner_id))?;

        Ok(Item::from(row))
    }
}
