// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory storage adapter, mainly for tests and ephemeral scratch space.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::error::StorageError;
use crate::keys::normalize_key;
use crate::model::Storage;

/// Storage over a process-local map. Contents vanish with the adapter.
pub struct MemoryStorage {
    url: Url,
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// An empty in-memory storage identified by `url`.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// An in-memory storage seeded with entries. Keys are normalized the
    /// same way the storage operations normalize them.
    pub fn with_entries(
        url: Url,
        entries: impl IntoIterator<Item = (String, Vec<u8>)>,
    ) -> Result<Self, StorageError> {
        let mut map = HashMap::new();
        for (key, data) in entries {
            map.insert(normalize_key(&key)?, data);
        }
        Ok(Self {
            url,
            entries: Mutex::new(map),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn url(&self) -> &Url {
        &self.url
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let key = normalize_key(key)?;
        Ok(self.lock().contains_key(&key))
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let normalized = normalize_key(key)?;
        self.lock()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    async fn write(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let key = normalize_key(key)?;
        self.lock().insert(key, data.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let normalized = normalize_key(key)?;
        if self.lock().remove(&normalized).is_none() {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    async fn list(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError> {
        let mut keys: Vec<String> = self
            .lock()
            .keys()
            .filter(|key| prefix.is_none_or(|p| key.starts_with(p)))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> MemoryStorage {
        MemoryStorage::new(Url::parse("memory://test").unwrap())
    }

    #[tokio::test]
    async fn write_read_delete_roundtrip() {
        let storage = storage();
        storage.write("a/b", b"data").await.unwrap();
        assert!(storage.exists("a/b").await.unwrap());
        assert_eq!(storage.read("a/b").await.unwrap(), b"data");

        storage.delete("a/b").await.unwrap();
        assert!(matches!(
            storage.read("a/b").await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn keys_are_normalized_consistently() {
        let storage = storage();
        storage.write("./a//b", b"data").await.unwrap();
        assert!(storage.exists("a/b").await.unwrap());
    }

    #[tokio::test]
    async fn seeded_entries_are_readable() {
        let storage = MemoryStorage::with_entries(
            Url::parse("memory://seeded").unwrap(),
            [("config.json".to_string(), b"{}".to_vec())],
        )
        .unwrap();
        assert_eq!(storage.read("config.json").await.unwrap(), b"{}");
    }

    #[tokio::test]
    async fn delete_missing_entry_reports_not_found() {
        let storage = storage();
        assert!(matches!(
            storage.delete("missing").await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn traversal_is_rejected() {
        let storage = storage();
        assert!(matches!(
            storage.write("../escape", b"x").await,
            Err(StorageError::PermissionDenied { .. })
        ));
    }

    #[tokio::test]
    async fn list_filters_by_prefix_and_sorts() {
        let storage = storage();
        storage.write("b", b"2").await.unwrap();
        storage.write("a/x", b"1").await.unwrap();
        storage.write("a/y", b"3").await.unwrap();

        assert_eq!(storage.list(None).await.unwrap(), ["a/x", "a/y", "b"]);
        assert_eq!(storage.list(Some("a/")).await.unwrap(), ["a/x", "a/y"]);
    }
}
