// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry plugins wrapping the storage adapters.
//!
//! Each plugin receives the full URL the caller resolved and builds a fresh
//! adapter from it; the registry performs no caching, so two `from` calls
//! yield two independent adapters.

use std::sync::Arc;

use async_trait::async_trait;
use pluggio_core::{BoxError, ResourcePlugin};
use url::Url;

use crate::adapters::{FileStorage, MemoryStorage, TmpStorage};
use crate::model::Storage;

/// Builds [`FileStorage`] for `file://` URLs.
pub struct FileStoragePlugin;

#[async_trait]
impl ResourcePlugin<Arc<dyn Storage>> for FileStoragePlugin {
    async fn build(&self, key: &str, _options: &()) -> Result<Arc<dyn Storage>, BoxError> {
        let url = Url::parse(key)?;
        Ok(Arc::new(FileStorage::open(&url).await?))
    }
}

/// Builds [`MemoryStorage`] for `memory://` URLs.
pub struct MemoryStoragePlugin;

#[async_trait]
impl ResourcePlugin<Arc<dyn Storage>> for MemoryStoragePlugin {
    async fn build(&self, key: &str, _options: &()) -> Result<Arc<dyn Storage>, BoxError> {
        let url = Url::parse(key)?;
        Ok(Arc::new(MemoryStorage::new(url)))
    }
}

/// Builds [`TmpStorage`] for `tmp://` URLs.
pub struct TmpStoragePlugin;

#[async_trait]
impl ResourcePlugin<Arc<dyn Storage>> for TmpStoragePlugin {
    async fn build(&self, key: &str, _options: &()) -> Result<Arc<dyn Storage>, BoxError> {
        let url = Url::parse(key)?;
        Ok(Arc::new(TmpStorage::create(&url)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[tokio::test]
    async fn registry_builds_memory_storage_from_full_url() {
        let registry = registry();
        registry
            .load("memory", Arc::new(MemoryStoragePlugin))
            .await
            .unwrap();

        let storage = registry.from("memory://cache").await.unwrap();
        assert_eq!(storage.url().as_str(), "memory://cache");

        storage.write("k", b"v").await.unwrap();
        assert_eq!(storage.read("k").await.unwrap(), b"v");
    }

    #[tokio::test]
    async fn each_resolution_builds_a_fresh_adapter() {
        let registry = registry();
        registry
            .load("memory", Arc::new(MemoryStoragePlugin))
            .await
            .unwrap();

        let first = registry.from("memory://cache").await.unwrap();
        first.write("k", b"v").await.unwrap();

        let second = registry.from("memory://cache").await.unwrap();
        assert!(!second.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn file_plugin_roots_at_the_url_directory() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry();
        registry
            .load("file", Arc::new(FileStoragePlugin))
            .await
            .unwrap();

        let url = format!("file://{}", dir.path().display());
        let storage = registry.from(&url).await.unwrap();
        storage.write("a.txt", b"1").await.unwrap();
        assert!(dir.path().join("a.txt").exists());
    }
}
