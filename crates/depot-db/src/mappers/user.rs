//! User entity <-> model mapper

use depot_core::{Item, User};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            username: model.username,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
            items: model.items.0.into_iter().map(Item::from).collect(),
        }
    }
}
