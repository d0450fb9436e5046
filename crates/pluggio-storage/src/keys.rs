// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage-key normalization shared by the adapters.

use crate::error::StorageError;

/// Normalize a `/`-separated key: collapse `.` and empty segments, resolve
/// `..`, and reject keys that escape the storage base.
pub(crate) fn normalize_key(key: &str) -> Result<String, StorageError> {
    let mut parts: Vec<&str> = Vec::new();
    for part in key.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() {
                    return Err(StorageError::PermissionDenied {
                        key: key.to_string(),
                    });
                }
            }
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return Err(StorageError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(parts.join("/"))
}
