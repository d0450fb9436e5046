// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pluggio registry core.

use thiserror::Error;

/// Boxed error type used for plugin and loader failures crossing the
/// registry boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A plugin is already registered under the key. The existing
    /// registration is left untouched.
    #[error("plugin for \"{key}\" already loaded")]
    PluginAlreadyLoaded { key: String },

    /// No plugin could be resolved for the key, statically or dynamically.
    ///
    /// When a dynamic-load attempt was made and failed, `source` carries the
    /// aggregate of the original lookup miss and the fallback failure.
    #[error("no plugin loaded for \"{key}\"")]
    PluginNotLoaded {
        key: String,
        #[source]
        source: Option<Box<DynamicLoadError>>,
    },

    /// A plugin was found but its `build` failed. Never triggers the
    /// dynamic fallback.
    #[error("failed to build resource from \"{key}\"")]
    ResourceBuild {
        key: String,
        #[source]
        source: BoxError,
    },

    /// The input could not be parsed as a URL. Raised by the URL resolver
    /// before any registry state is touched.
    #[error("invalid resource URL \"{input}\"")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

impl RegistryError {
    /// The key (or, for [`RegistryError::InvalidUrl`], the raw input) the
    /// failure refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::PluginAlreadyLoaded { key }
            | Self::PluginNotLoaded { key, .. }
            | Self::ResourceBuild { key, .. } => key,
            Self::InvalidUrl { input, .. } => input,
        }
    }
}

/// Aggregate of the two failures behind a failed dynamic-load attempt: the
/// lookup miss that triggered the fallback, and whatever the attempt itself
/// raised (a loader error, or a second miss / build failure on retry).
#[derive(Debug, Error)]
#[error("{original}; dynamic load attempt failed: {fallback}")]
pub struct DynamicLoadError {
    /// The "no plugin registered" condition that entered the fallback phase.
    pub original: RegistryError,
    /// The error the fallback attempt itself produced.
    #[source]
    pub fallback: BoxError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_not_loaded_preserves_aggregate_cause() {
        let err = RegistryError::PluginNotLoaded {
            key: "sample".to_string(),
            source: Some(Box::new(DynamicLoadError {
                original: RegistryError::PluginNotLoaded {
                    key: "sample".to_string(),
                    source: None,
                },
                fallback: "loader exploded".into(),
            })),
        };

        let source = std::error::Error::source(&err).expect("aggregate cause");
        assert!(source.to_string().contains("loader exploded"));
        assert!(source.to_string().contains("no plugin loaded"));
    }

    #[test]
    fn key_accessor_covers_all_variants() {
        let already = RegistryError::PluginAlreadyLoaded {
            key: "a".to_string(),
        };
        assert_eq!(already.key(), "a");

        let invalid = RegistryError::InvalidUrl {
            input: "not a url".to_string(),
            source: url::Url::parse("not a url").unwrap_err(),
        };
        assert_eq!(invalid.key(), "not a url");
    }
}
