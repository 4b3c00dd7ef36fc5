//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Optional fields are
//! written as `null` rather than omitted.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Item Responses
// ============================================================================

/// Item as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// User Responses
// ============================================================================

/// User as returned by the API, with owned items embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub items: Vec<ItemResponse>,
}

// ============================================================================
// Service Responses
// ============================================================================

/// Root endpoint payload
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: &'static str,
}

impl WelcomeResponse {
    pub fn new(app_name: &str) -> Self {
        Self {
            message: format!("Welcome to {app_name}"),
            status: "healthy",
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            database: "connected",
            error: None,
        }
    }

    pub fn unhealthy(error: impl ToString) -> Self {
        Self {
            status: "unhealthy",
            database: "disconnected",
            error: Some(error.to_string()),
        }
    }
}
