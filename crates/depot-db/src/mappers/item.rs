//! Item entity <-> model mapper

use depot_core::Item;

use crate::models::ItemModel;

/// Convert ItemModel to Item entity
impl From<ItemModel> for Item {
    fn from(model: ItemModel) -> Self {
        Item {
            id: model.id,
            title: model.title,
            description: model.description,
            owner_id: model.owner_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
