//! Infrastructure layer - key-value storage adapters.

mod kv;
mod memory_store;
mod redis_store;

pub use kv::{KeyValueStore, KvKey, KEY_SEPARATOR};
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
