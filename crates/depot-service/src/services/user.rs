//! User service
//!
//! Handles user registration and lookups.

use depot_core::NewUser;
use depot_db::Session;
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, Pagination, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// The email is checked up front so the common duplicate case gets a clean
    /// conflict; the unique constraint still catches concurrent registrations.
    #[instrument(skip(self, session, request), fields(email = %request.email))]
    pub async fn create_user(
        &self,
        session: &mut Session,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        if session.users().find_by_email(&request.email).await?.is_some() {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let hashed_password = self.ctx.password_service().hash(&request.password)?;
        let new_user = NewUser::new(request.email, request.username, hashed_password);
        let user = session.users().create(&new_user).await?;

        info!(user_id = user.id, username = %user.username, "User created");

        Ok(UserResponse::from(user))
    }

    /// Get user by ID, with items
    #[instrument(skip(self, session))]
    pub async fn get_user(&self, session: &mut Session, user_id: i64) -> ServiceResult<UserResponse> {
        let user = session
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(UserResponse::from(user))
    }

    /// List users ordered by id
    #[instrument(skip(self, session))]
    pub async fn list_users(
        &self,
        session: &mut Session,
        pagination: Pagination,
    ) -> ServiceResult<Vec<UserResponse>> {
        let users = session
            .users()
            .list(pagination.skip, pagination.limit)
            .await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
