// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The pluggable storage contract.

use async_trait::async_trait;
use url::Url;

use crate::error::StorageError;

/// A byte-oriented key/value view over some storage backing.
///
/// Keys are `/`-separated paths interpreted relative to the storage base;
/// adapters reject keys that escape it. Adapters are free to interpret the
/// URL they were built from however they need.
#[async_trait]
pub trait Storage: Send + Sync {
    /// The URL this storage was built from.
    fn url(&self) -> &Url;

    /// Whether an entry exists under `key`.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Read the entry under `key`.
    ///
    /// Fails with [`StorageError::NotFound`] when the entry does not exist.
    async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Write `data` under `key`, creating the entry (and any intermediate
    /// directories) as needed.
    async fn write(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Delete the entry under `key`.
    ///
    /// Fails with [`StorageError::NotFound`] when the entry does not exist.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// List entry keys, optionally filtered to those starting with
    /// `prefix`, in sorted order.
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError>;
}
