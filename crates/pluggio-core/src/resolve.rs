// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup-key resolution strategies.
//!
//! The registry core is generic over how a raw input maps to the key used
//! for the plugin-map lookup. Key-based registries use the input verbatim;
//! URL-based registries look up by scheme while still handing the full URL
//! to plugins and loaders.

use url::Url;

use crate::error::RegistryError;

/// Strategy mapping a raw input to the plugin-map lookup key.
pub trait Resolve: Send + Sync {
    /// Derive the lookup key, failing before any registry state is touched
    /// when the input is malformed.
    fn lookup_key(&self, input: &str) -> Result<String, RegistryError>;
}

/// Identity resolution: the lookup key is the input string itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyResolver;

impl Resolve for KeyResolver {
    fn lookup_key(&self, input: &str) -> Result<String, RegistryError> {
        Ok(input.to_string())
    }
}

/// URL resolution: the lookup key is the URL's scheme, without its trailing
/// separator (`file://…` resolves under `file`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlResolver;

impl Resolve for UrlResolver {
    fn lookup_key(&self, input: &str) -> Result<String, RegistryError> {
        let url = Url::parse(input).map_err(|source| RegistryError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;
        Ok(url.scheme().to_string())
    }
}
