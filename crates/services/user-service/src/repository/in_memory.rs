//! Process-local user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{generate_user_id, NewUser, PageSlice, User, UserPatch};

use super::UserRepository;

/// Users kept in creation order. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, fields: NewUser) -> AppResult<User> {
        let user = User::new(generate_user_id(), fields);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_all_users(&self, page: u64, limit: u64) -> AppResult<PageSlice<User>> {
        let users = self.users.read().await;
        Ok(PageSlice::window(users.as_slice(), page, limit))
    }

    async fn find_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.apply(patch);
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.users.write().await.retain(|u| u.id != id);
        Ok(())
    }
}
