//! Item service

use depot_core::NewItem;
use depot_db::Session;
use tracing::{info, instrument};

use crate::dto::{CreateItemRequest, ItemResponse, Pagination};

use super::error::{ServiceError, ServiceResult};

/// Item service
///
/// Stateless; everything it touches lives on the caller's session.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemService;

impl ItemService {
    pub fn new() -> Self {
        Self
    }

    /// Create an item owned by an existing user
    #[instrument(skip(self, session, request), fields(title = %request.title))]
    pub async fn create_for_user(
        &self,
        session: &mut Session,
        user_id: i64,
        request: CreateItemRequest,
    ) -> ServiceResult<ItemResponse> {
        if session.users().find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::not_found("User", user_id));
        }

        let new_item = NewItem::new(request.title, request.description);
        let item = session.items().create_for_owner(&new_item, user_id).await?;

        info!(item_id = item.id, owner_id = item.owner_id, "Item created");

        Ok(ItemResponse::from(item))
    }

    /// List items across all owners
    #[instrument(skip(self, session))]
    pub async fn list_items(
        &self,
        session: &mut Session,
        pagination: Pagination,
    ) -> ServiceResult<Vec<ItemResponse>> {
        let items = session
            .items()
            .list(pagination.skip, pagination.limit)
            .await?;

        Ok(items.into_iter().map(ItemResponse::from).collect())
    }
}
