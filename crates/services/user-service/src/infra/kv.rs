//! Key-value storage port.
//!
//! The user repository needs exactly four primitives from a store: point get,
//! point set, point delete and prefix scan. No transactions, no secondary
//! indexes.

use std::fmt;

use async_trait::async_trait;

use common::AppResult;

/// Separator between key parts in the encoded form.
pub const KEY_SEPARATOR: char = ':';

/// Composite key made of ordered string parts, e.g. `("users", id)`.
///
/// Parts must not contain [`KEY_SEPARATOR`]. Keys order part-wise, so every
/// extension of a key sorts directly after it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KvKey(Vec<String>);

impl KvKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Key made of `self` followed by one more part.
    pub fn child(&self, part: impl Into<String>) -> Self {
        let mut parts = self.0.clone();
        parts.push(part.into());
        Self(parts)
    }

    /// Last part of the key (the record id for `("users", id)`).
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Part-wise prefix test: `("users")` matches `("users", x)` but not `("users2", x)`.
    pub fn starts_with(&self, prefix: &KvKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Flat string form used by stores with string keys.
    pub fn encode(&self) -> String {
        self.0.join(&KEY_SEPARATOR.to_string())
    }

    pub fn decode(encoded: &str) -> Self {
        Self::new(encoded.split(KEY_SEPARATOR))
    }
}

impl fmt::Display for KvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// Minimal key-value store interface.
///
/// Values are opaque strings; callers pick their own encoding.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Point lookup; `None` when the key is absent.
    async fn get(&self, key: &KvKey) -> AppResult<Option<String>>;

    /// Insert or overwrite the value under `key`.
    async fn set(&self, key: &KvKey, value: String) -> AppResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &KvKey) -> AppResult<()>;

    /// Every entry strictly under `prefix`, sorted ascending by key.
    async fn list(&self, prefix: &KvKey) -> AppResult<Vec<(KvKey, String)>>;
}
