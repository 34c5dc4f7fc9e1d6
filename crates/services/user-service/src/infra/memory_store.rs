//! In-process ordered key-value store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;

use super::kv::{KeyValueStore, KvKey};

/// Key-value store backed by an ordered map. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<KvKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, across all prefixes.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &KvKey) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &KvKey, value: String) -> AppResult<()> {
        self.entries.write().await.insert(key.clone(), value);
        Ok(())
    }

    async fn delete(&self, key: &KvKey) -> AppResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &KvKey) -> AppResult<Vec<(KvKey, String)>> {
        let entries = self.entries.read().await;

        // Children of a key sort directly after it, so a range scan suffices.
        Ok(entries
            .range(prefix.clone()..)
            .skip_while(|(k, _)| *k == prefix)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_delete() {
        let store = MemoryStore::new();
        let key = KvKey::new(["users", "1"]);

        assert_eq!(store.get(&key).await.unwrap(), None);

        store.set(&key, "one".to_string()).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap().as_deref(), Some("one"));

        store.set(&key, "uno".to_string()).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap().as_deref(), Some("uno"));
        assert_eq!(store.len().await, 1);

        store.delete(&key).await.unwrap();
        store.delete(&key).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_by_prefix() {
        let store = MemoryStore::new();
        store.set(&KvKey::new(["users", "b"]), "b".into()).await.unwrap();
        store.set(&KvKey::new(["users", "a"]), "a".into()).await.unwrap();
        store.set(&KvKey::new(["users2", "c"]), "c".into()).await.unwrap();
        store.set(&KvKey::new(["orders", "d"]), "d".into()).await.unwrap();
        store.set(&KvKey::new(["users"]), "root".into()).await.unwrap();

        let listed = store.list(&KvKey::new(["users"])).await.unwrap();

        assert_eq!(
            listed,
            vec![
                (KvKey::new(["users", "a"]), "a".to_string()),
                (KvKey::new(["users", "b"]), "b".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_empty_prefix() {
        let store = MemoryStore::new();
        store.set(&KvKey::new(["orders", "d"]), "d".into()).await.unwrap();

        assert!(store.list(&KvKey::new(["users"])).await.unwrap().is_empty());
    }
}
