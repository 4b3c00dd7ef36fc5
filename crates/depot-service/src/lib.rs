//! # depot-service
//!
//! Application layer containing the user and item use cases and their DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ItemService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
