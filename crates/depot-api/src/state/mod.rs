//! Application state

use std::sync::Arc;

use depot_common::AppConfig;
use depot_service::ServiceContext;

/// Shared by every handler; cloning only bumps two reference counts
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    /// Database handle and password hasher
    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    /// Configuration loaded at startup
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("app", &self.config.app.name)
            .field("services", &self.services)
            .finish()
    }
}
