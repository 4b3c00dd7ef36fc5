//! Item handlers

use axum::{extract::State, Json};
use depot_service::dto::{CreateItemRequest, ItemResponse, Pagination};
use depot_service::ItemService;

use crate::extractors::{ParsedPath, UserIdPath, ValidatedJson, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create an item owned by a user
///
/// POST /users/{user_id}/items/
pub async fn create_item_for_user(
    State(state): State<AppState>,
    ParsedPath(path): ParsedPath<UserIdPath>,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> ApiResult<Json<ItemResponse>> {
    let mut session = state.service_context().session().await?;
    let item = ItemService::new()
        .create_for_user(&mut session, path.user_id, request)
        .await?;
    Ok(Json(item))
}

/// List items across all users
///
/// GET /items/?skip=&limit=
pub async fn list_items(
    State(state): State<AppState>,
    ValidatedQuery(pagination): ValidatedQuery<Pagination>,
) -> ApiResult<Json<Vec<ItemResponse>>> {
    let mut session = state.service_context().session().await?;
    let items = ItemService::new().list_items(&mut session, pagination).await?;
    Ok(Json(items))
}
