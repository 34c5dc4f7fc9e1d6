//! User service - pagination shaping over the injected repository.
//!
//! Every operation other than `get_users` is a straight pass-through. Input
//! validation happens before a request reaches this layer.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{NewUser, Paginated, User, UserPatch};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// One page of users with total count and page count
    async fn get_users(&self, page: u64, limit: u64) -> AppResult<Paginated<User>>;

    /// Get user by ID; `None` when absent
    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn insert_user(&self, fields: NewUser) -> AppResult<User>;

    /// Apply a partial update; `None` when absent
    async fn update_user(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>>;

    /// Delete user; deleting an absent user succeeds
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_users(&self, page: u64, limit: u64) -> AppResult<Paginated<User>> {
        let slice = self.repo.find_all_users(page, limit).await?;
        Ok(Paginated::new(slice, page, limit))
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.repo.find_user_by_id(id).await
    }

    async fn insert_user(&self, fields: NewUser) -> AppResult<User> {
        self.repo.create_user(fields).await
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>> {
        self.repo.update_user(id, patch).await
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.repo.delete_user(id).await
    }
}
