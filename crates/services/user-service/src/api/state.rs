//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::StorageBackend;
use crate::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub storage: StorageBackend,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, storage: StorageBackend) -> Self {
        Self {
            user_service,
            storage,
        }
    }
}
