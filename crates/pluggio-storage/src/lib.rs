// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable storage for Pluggio.
//!
//! Defines the [`Storage`] contract, the file/memory/tmp adapters, and the
//! registry plugins that build them from URLs:
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use pluggio_storage::{registry, FileStoragePlugin, Storage};
//!
//! let storage = registry();
//! storage.load("file", Arc::new(FileStoragePlugin)).await?;
//!
//! let handle = storage.from("file://./data").await?;
//! handle.write("greeting.txt", b"hello").await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod error;
mod keys;
pub mod model;
pub mod plugins;

use std::sync::Arc;

use pluggio_core::{Registry, UrlRegistry};

pub use adapters::{FileStorage, MemoryStorage, TmpStorage};
pub use error::StorageError;
pub use model::Storage;
pub use plugins::{FileStoragePlugin, MemoryStoragePlugin, TmpStoragePlugin};

/// The URL-based registry resolving storage handles.
pub type StorageRegistry = UrlRegistry<Arc<dyn Storage>>;

/// Create the storage registry. One instance is meant to be created at
/// startup and shared by reference among all call sites.
pub fn registry() -> StorageRegistry {
    Registry::url_based("Storage")
}
