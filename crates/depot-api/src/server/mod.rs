//! Server setup and initialization
//!
//! Provides the application builder and the server lifecycle: connect, create the
//! schema, serve until a shutdown signal, then close the pool.

use axum::Router;
use depot_common::{AppConfig, AppError};
use depot_db::{create_pool, ensure_schema, Database, PoolConfig};
use depot_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Connect to the database, create missing tables and build the AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.name,
        "Connecting to PostgreSQL..."
    );
    let pool_config = PoolConfig::from_settings(&config.database, config.app.debug);
    let pool = create_pool(&pool_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(
        max_connections = pool_config.max_connections,
        "PostgreSQL connection established"
    );

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    state_from_database(Database::new(pool), config)
}

/// Build the AppState around an existing database handle
pub fn state_from_database(database: Database, config: AppConfig) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .database(database)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener until shutdown is signalled
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    let database = state.service_context().database().clone();
    let app = create_app(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Shutting down...");
    database.close().await;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    let state = create_app_state(config).await?;

    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    serve(listener, state).await
}

/// Resolve on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
