//! Route definitions
//!
//! Collection routes answer both with and without the trailing slash.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, health, items, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(item_routes())
        .fallback(handlers::not_found)
}

/// Welcome and health routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(users::create_user).get(users::list_users))
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/items/", post(items::create_item_for_user))
        .route("/users/:user_id/items", post(items::create_item_for_user))
}

/// Item routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/", get(items::list_items))
        .route("/items", get(items::list_items))
}
