//! Business logic services
//!
//! Services orchestrate the data-access operations of one request. Each call runs
//! on the [`Session`](depot_db::Session) the caller acquired for that request.

pub mod context;
pub mod error;
pub mod item;
pub mod user;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use item::ItemService;
pub use user::UserService;
