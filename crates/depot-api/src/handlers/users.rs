//! User handlers
//!
//! Handlers acquire their database session only after every extractor has
//! succeeded, so rejected requests never hold a pooled connection.

use axum::{extract::State, Json};
use depot_service::dto::{CreateUserRequest, Pagination, UserResponse};
use depot_service::UserService;

use crate::extractors::{ParsedPath, UserIdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a user
///
/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let ctx = state.service_context();
    let mut session = ctx.session().await?;
    let response = UserService::new(ctx).create_user(&mut session, request).await?;
    Ok(Created(Json(response)))
}

/// List users
///
/// GET /users/?skip=&limit=
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(pagination): ValidatedQuery<Pagination>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let ctx = state.service_context();
    let mut session = ctx.session().await?;
    let users = UserService::new(ctx).list_users(&mut session, pagination).await?;
    Ok(Json(users))
}

/// Get user by ID, with items
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    ParsedPath(path): ParsedPath<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let ctx = state.service_context();
    let mut session = ctx.session().await?;
    let user = UserService::new(ctx).get_user(&mut session, path.user_id).await?;
    Ok(Json(user))
}
