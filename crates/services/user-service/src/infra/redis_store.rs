//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, RedisError};
use tracing::debug;

use common::AppResult;

use super::kv::{KeyValueStore, KvKey, KEY_SEPARATOR};

/// Keys requested per `SCAN` round trip.
const SCAN_BATCH_SIZE: usize = 200;

/// Redis key-value store wrapper.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis.
    pub async fn connect(url: &str) -> Result<Self, RedisError> {
        debug!("Connecting to Redis at {}", url);
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }

    /// Check connectivity with a `PING`.
    pub async fn ping(&self) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Collect every key matching `pattern` with a cursor-driven `SCAN`.
    async fn scan_keys(&self, pattern: &str) -> AppResult<Vec<String>> {
        let mut conn = self.conn.clone();
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await?;
            keys.extend(batch);

            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may report a key more than once
        keys.sort();
        keys.dedup();
        Ok(keys)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &KvKey) -> AppResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key.encode()).await?;
        Ok(value)
    }

    async fn set(&self, key: &KvKey, value: String) -> AppResult<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key.encode(), value).await?;
        Ok(())
    }

    async fn delete(&self, key: &KvKey) -> AppResult<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key.encode()).await?;
        Ok(())
    }

    async fn list(&self, prefix: &KvKey) -> AppResult<Vec<(KvKey, String)>> {
        let pattern = prefix_pattern(prefix);
        let keys = self.scan_keys(&pattern).await?;
        debug!("Scanned {} keys for pattern {}", keys.len(), pattern);

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn.clone();
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(keys.as_slice())
            .query_async(&mut conn)
            .await?;

        Ok(collect_entries(&keys, values))
    }
}

/// Pair scanned keys with their `MGET` values, sorted by key.
///
/// Keys deleted between `SCAN` and `MGET` come back as nil and are skipped.
fn collect_entries(keys: &[String], values: Vec<Option<String>>) -> Vec<(KvKey, String)> {
    let mut entries: Vec<(KvKey, String)> = keys
        .iter()
        .zip(values)
        .filter_map(|(key, value)| value.map(|v| (KvKey::decode(key), v)))
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
}

/// `SCAN MATCH` pattern selecting every key strictly under `prefix`.
fn prefix_pattern(prefix: &KvKey) -> String {
    format!("{}{}*", escape_glob(&prefix.encode()), KEY_SEPARATOR)
}

/// Escape Redis glob metacharacters so the prefix matches literally.
fn escape_glob(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
