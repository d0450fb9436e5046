// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporary-directory storage adapter.
//!
//! Behaves like [`FileStorage`](super::FileStorage) rooted at a fresh
//! temporary directory; the directory and everything in it are removed when
//! the adapter is dropped.

use async_trait::async_trait;
use tempfile::TempDir;
use url::Url;

use crate::adapters::file::FileStorage;
use crate::error::StorageError;
use crate::model::Storage;

/// Storage over a temporary directory, cleaned up on drop.
pub struct TmpStorage {
    inner: FileStorage,
    // Held for its Drop impl, which removes the directory.
    _dir: TempDir,
}

impl TmpStorage {
    /// Create a fresh temporary directory identified by `url`.
    pub fn create(url: &Url) -> Result<Self, StorageError> {
        let dir = tempfile::tempdir().map_err(|e| StorageError::operation(url.as_str(), e))?;
        let inner = FileStorage::rooted(url.clone(), dir.path().to_path_buf());
        Ok(Self { inner, _dir: dir })
    }
}

#[async_trait]
impl Storage for TmpStorage {
    fn url(&self) -> &Url {
        self.inner.url()
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.inner.exists(key).await
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.inner.write(key, data).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.inner.delete(key).await
    }

    async fn list(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError> {
        self.inner.list(prefix).await
    }
}
