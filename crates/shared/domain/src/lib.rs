//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod pagination;
pub mod user;

pub use constants::*;
#[cfg(feature = "openapi")]
pub use pagination::PaginatedUsers;
pub use pagination::{total_pages, PageSlice, Paginated};
pub use user::{generate_user_id, NewUser, User, UserPatch};
