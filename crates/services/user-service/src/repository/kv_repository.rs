//! User repository over a key-value store.
//!
//! Each user is stored as JSON under the composite key `("users", id)`.
//! Listing is a full prefix scan followed by in-memory pagination, so it costs
//! O(total) per call whatever the page size. Users are listed in ascending
//! key order, i.e. by id.
//!
//! `update_user` is read-then-write without any compare-and-set: two
//! concurrent updates of the same id can lose one of the writes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use common::AppResult;
use domain::{generate_user_id, NewUser, PageSlice, User, UserPatch, USERS_KEY_PREFIX};

use super::UserRepository;
use crate::infra::{KeyValueStore, KvKey};

/// Concrete implementation of UserRepository over any [`KeyValueStore`]
pub struct KvUserRepository {
    store: Arc<dyn KeyValueStore>,
    prefix: KvKey,
}

impl KvUserRepository {
    /// Create new repository instance over an already connected store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            prefix: KvKey::new([USERS_KEY_PREFIX]),
        }
    }

    fn user_key(&self, id: &str) -> KvKey {
        self.prefix.child(id)
    }

    async fn write(&self, user: &User) -> AppResult<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(&self.user_key(&user.id), json).await
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn create_user(&self, fields: NewUser) -> AppResult<User> {
        let user = User::new(generate_user_id(), fields);
        self.write(&user).await?;
        debug!("Stored user {}", user.id);
        Ok(user)
    }

    async fn find_all_users(&self, page: u64, limit: u64) -> AppResult<PageSlice<User>> {
        let entries = self.store.list(&self.prefix).await?;

        let mut users = Vec::with_capacity(entries.len());
        for (key, json) in entries {
            if json.is_empty() {
                warn!("Skipping empty value under {}", key);
                continue;
            }
            users.push(serde_json::from_str::<User>(&json)?);
        }

        Ok(PageSlice::window(users.as_slice(), page, limit))
    }

    async fn find_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        match self.store.get(&self.user_key(id)).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>> {
        let Some(mut user) = self.find_user_by_id(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(user));
        }

        user.apply(patch);
        self.write(&user).await?;
        Ok(Some(user))
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.store.delete(&self.user_key(id)).await
    }
}
