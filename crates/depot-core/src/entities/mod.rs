//! Domain entities - core business objects

mod item;
mod user;

pub use item::{Item, NewItem};
pub use user::{NewUser, User};
