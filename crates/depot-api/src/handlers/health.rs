//! Health check handlers

use std::time::Duration;

use axum::{extract::State, Json};
use depot_service::dto::{HealthResponse, WelcomeResponse};
use tracing::warn;

use crate::state::AppState;

/// Longest the health check waits on the database before reporting it unreachable
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Welcome payload
///
/// GET /
pub async fn root(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new(&state.config().app.name))
}

/// Database connectivity check
///
/// GET /health
///
/// Always answers 200; the body says whether the database is reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ping = state.service_context().database().ping();
    match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, ping).await {
        Ok(Ok(())) => Json(HealthResponse::healthy()),
        Ok(Err(e)) => {
            warn!(error = %e, "Health check failed");
            Json(HealthResponse::unhealthy(e))
        }
        Err(_) => {
            warn!(timeout = ?HEALTH_CHECK_TIMEOUT, "Health check timed out");
            Json(HealthResponse::unhealthy(format!(
                "database did not respond within {}s",
                HEALTH_CHECK_TIMEOUT.as_secs()
            )))
        }
    }
}
