//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Users
// =============================================================================

/// Youngest accepted user age (inclusive)
pub const MIN_AGE: i32 = 2;

/// Oldest accepted user age (inclusive)
pub const MAX_AGE: i32 = 100;

// =============================================================================
// Pagination
// =============================================================================

/// Page requested when the caller does not specify one (pages are 1-based)
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the caller does not specify one
pub const DEFAULT_LIMIT: u64 = 10;

// =============================================================================
// Storage
// =============================================================================

/// Leading key part under which user records are stored
pub const USERS_KEY_PREFIX: &str = "users";
