//! User repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{NewUser, PageSlice, User, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Absence of a record is reported as `None`, never as an error. Errors are
/// storage faults and are passed through unchanged.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user under a freshly generated id
    async fn create_user(&self, fields: NewUser) -> AppResult<User>;

    /// Window `[(page - 1) * limit, page * limit)` of all users, plus the total count.
    ///
    /// Ordering is fixed per implementation and stable while no writes happen.
    async fn find_all_users(&self, page: u64, limit: u64) -> AppResult<PageSlice<User>>;

    /// Find user by exact id
    async fn find_user_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Merge the supplied fields into an existing user; `None` without side effects if absent
    async fn update_user(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>>;

    /// Remove user by id; succeeds whether or not the user exists
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}
