// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem-backed storage adapter.
//!
//! The adapter is rooted at a base directory derived from the URL's host and
//! path (`file://./data` roots at `./data`, `file:///var/data` at
//! `/var/data`). Keys resolve inside the base; escapes are rejected before
//! any filesystem access.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::StorageError;
use crate::keys::normalize_key;
use crate::model::Storage;

/// Storage over a directory tree.
pub struct FileStorage {
    url: Url,
    base: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) the base directory named by `url`.
    pub async fn open(url: &Url) -> Result<Self, StorageError> {
        let base = base_dir(url);
        tokio::fs::create_dir_all(&base)
            .await
            .map_err(|e| StorageError::operation(&base.display().to_string(), e))?;
        debug!(base = %base.display(), "file storage opened");
        Ok(Self {
            url: url.clone(),
            base,
        })
    }

    /// Root an adapter at an existing directory, keeping `url` as its
    /// identity. Used by the tmp adapter.
    pub(crate) fn rooted(url: Url, base: PathBuf) -> Self {
        Self { url, base }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        Ok(self.base.join(normalize_key(key)?))
    }
}

/// Base directory from a URL's host and path components.
fn base_dir(url: &Url) -> PathBuf {
    let mut dir = String::new();
    if let Some(host) = url.host_str() {
        dir.push_str(host);
    }
    dir.push_str(url.path());
    if dir.is_empty() {
        dir.push('.');
    }
    PathBuf::from(dir)
}

#[async_trait]
impl Storage for FileStorage {
    fn url(&self) -> &Url {
        &self.url
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.resolve(key)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| StorageError::operation(key, e))
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
                key: key.to_string(),
            }),
            Err(e) => Err(StorageError::operation(key, e)),
        }
    }

    async fn write(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::operation(key, e))?;
        }
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| StorageError::operation(key, e))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
                key: key.to_string(),
            }),
            Err(e) => Err(StorageError::operation(key, e)),
        }
    }

    async fn list(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut pending = vec![self.base.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(StorageError::operation(prefix.unwrap_or(""), e)),
            };
            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| StorageError::operation(prefix.unwrap_or(""), e))?
            {
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| StorageError::operation(prefix.unwrap_or(""), e))?;
                let path = entry.path();
                if file_type.is_dir() {
                    pending.push(path);
                } else if let Ok(rel) = path.strip_prefix(&self.base) {
                    let key = rel_key(rel);
                    if prefix.is_none_or(|p| key.starts_with(p)) {
                        keys.push(key);
                    }
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn rel_key(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
