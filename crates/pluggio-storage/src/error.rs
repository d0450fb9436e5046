// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for storage adapters.

use thiserror::Error;

/// Failures raised by [`Storage`](crate::Storage) implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No entry exists under the key.
    #[error("no such entry: \"{key}\"")]
    NotFound { key: String },

    /// The key escapes the storage base (path traversal) or the operation
    /// is not permitted on it.
    #[error("permission denied: \"{key}\"")]
    PermissionDenied { key: String },

    /// The key is empty or cannot name an entry.
    #[error("invalid storage key: \"{key}\"")]
    InvalidKey { key: String },

    /// The backend failed to carry out the operation.
    #[error("storage operation failed for \"{key}\"")]
    Operation {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    pub(crate) fn operation(key: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Operation {
            key: key.to_string(),
            source: Box::new(source),
        }
    }
}
