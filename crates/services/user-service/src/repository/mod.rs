//! Repository layer for data access.

mod in_memory;
mod kv_repository;
mod user_repository;

pub use in_memory::InMemoryUserRepository;
pub use kv_repository::KvUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
