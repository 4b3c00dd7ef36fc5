//! Database handle and request-scoped sessions

use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::{debug, info};

use crate::repositories::{PgItemRepository, PgUserRepository};

/// Shared handle to the connection pool
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Take a connection out of the pool for the duration of one unit of work
    ///
    /// # Errors
    /// Returns an error if no connection becomes available within the acquire timeout
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        debug!(
            pool_size = self.pool.size(),
            idle = self.pool.num_idle(),
            "Session opened"
        );
        Ok(Session { conn })
    }

    /// Run a trivial query on a fresh session
    ///
    /// # Errors
    /// Returns an error if a connection cannot be acquired or the query fails
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.session().await?.ping().await
    }

    /// Close every connection and stop handing out new ones
    pub async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}

/// One pooled connection, returned to the pool when dropped
#[derive(Debug)]
pub struct Session {
    conn: PoolConnection<Postgres>,
}

impl Session {
    /// User operations on this session
    pub fn users(&mut self) -> PgUserRepository<'_> {
        PgUserRepository::new(&mut self.conn)
    }

    /// Item operations on this session
    pub fn items(&mut self) -> PgItemRepository<'_> {
        PgItemRepository::new(&mut self.conn)
    }

    /// Execute `SELECT 1`
    ///
    /// # Errors
    /// Returns the driver error if the connection is unusable
    pub async fn ping(&mut self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&mut *self.conn).await?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Session released");
    }
}
