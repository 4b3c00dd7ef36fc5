//! Axum extractors for request handling
//!
//! Every rejection is turned into an [`ApiError`](crate::response::ApiError) with
//! status 422, before the handler runs and before any database session is opened.

mod path;
mod query;
mod validated;

pub use path::{ParsedPath, UserIdPath};
pub use query::ValidatedQuery;
pub use validated::ValidatedJson;
