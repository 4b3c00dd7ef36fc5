//! Service context - dependency container for services
//!
//! Holds the database handle and the password hasher.

use std::sync::Arc;

use depot_common::PasswordService;
use depot_db::{Database, Session};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; shared by every request.
#[derive(Clone)]
pub struct ServiceContext {
    database: Database,
    password_service: Arc<PasswordService>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(database: Database, password_service: Arc<PasswordService>) -> Self {
        Self {
            database,
            password_service,
        }
    }

    // === Database ===

    /// Get the database handle
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Open a session for one request
    ///
    /// # Errors
    /// Returns an error if no pooled connection becomes available
    pub async fn session(&self) -> ServiceResult<Session> {
        self.database
            .session()
            .await
            .map_err(|e| ServiceError::internal(format!("Failed to acquire database session: {e}")))
    }

    // === Services ===

    /// Get the password hasher
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("database", &"Database")
            .field("password_service", &"PasswordService")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    database: Option<Database>,
    password_service: Option<Arc<PasswordService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the database is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.database
                .ok_or_else(|| ServiceError::internal("database is required"))?,
            self.password_service.unwrap_or_default(),
        ))
    }
}
