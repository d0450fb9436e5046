// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resource registry and its two-phase resolution algorithm.
//!
//! A [`Registry`] maps keys to [`ResourcePlugin`]s and holds an append-only
//! list of `(Pattern, DynamicPluginLoader)` pairs. Resolution first tries the
//! direct lookup; only when no plugin is registered does it fall back to the
//! first matching dynamic loader, retry the lookup once, and roll back any
//! partial registration if that attempt fails.
//!
//! One registry instance is created per resource kind at startup and shared
//! by reference; there is no ambient global state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{BoxError, DynamicLoadError, RegistryError};
use crate::pattern::Pattern;
use crate::resolve::{KeyResolver, Resolve, UrlResolver};
use crate::traits::{DynamicPluginLoader, Params, ResourcePlugin};

/// Registry of resource plugins with dynamic-loader fallback.
///
/// `R` is the resource a plugin builds, `O` the options forwarded to
/// `build`, and `S` the lookup-key resolution strategy.
pub struct Registry<R, O = (), S = KeyResolver> {
    name: String,
    resolver: S,
    plugins: RwLock<HashMap<String, Arc<dyn ResourcePlugin<R, O>>>>,
    loaders: RwLock<Vec<(Pattern, Arc<dyn DynamicPluginLoader>)>>,
}

/// Registry whose lookup key is the input string itself.
pub type KeyRegistry<R, O = ()> = Registry<R, O, KeyResolver>;

/// Registry whose lookup key is the input URL's scheme.
pub type UrlRegistry<R, O = ()> = Registry<R, O, UrlResolver>;

impl<R, O> KeyRegistry<R, O> {
    /// Create a key-based registry. `name` identifies the resource kind in
    /// diagnostics.
    pub fn key_based(name: impl Into<String>) -> Self {
        Self::with_resolver(name, KeyResolver)
    }
}

impl<R, O> UrlRegistry<R, O> {
    /// Create a URL-based registry. `name` identifies the resource kind in
    /// diagnostics.
    pub fn url_based(name: impl Into<String>) -> Self {
        Self::with_resolver(name, UrlResolver)
    }
}

impl<R, O, S> Registry<R, O, S> {
    /// Create a registry with an explicit resolution strategy.
    pub fn with_resolver(name: impl Into<String>, resolver: S) -> Self {
        Self {
            name: name.into(),
            resolver,
            plugins: RwLock::new(HashMap::new()),
            loaders: RwLock::new(Vec::new()),
        }
    }

    /// The resource-kind name this registry was created with.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R, O, S> Registry<R, O, S>
where
    R: Send + 'static,
    O: Sync + 'static,
    S: Resolve,
{
    /// Register `plugin` under `key`.
    ///
    /// Fails with [`RegistryError::PluginAlreadyLoaded`] if the key is
    /// already taken; the existing registration is left untouched.
    pub async fn load(
        &self,
        key: impl Into<String>,
        plugin: Arc<dyn ResourcePlugin<R, O>>,
    ) -> Result<(), RegistryError> {
        let key = key.into();
        let mut plugins = self.plugins.write().await;
        if plugins.contains_key(&key) {
            return Err(RegistryError::PluginAlreadyLoaded { key });
        }
        debug!(registry = %self.name, key = %key, "plugin loaded");
        plugins.insert(key, plugin);
        Ok(())
    }

    /// Append a `(pattern, loader)` pair to the dynamic-loader list.
    ///
    /// Loaders are tried in registration order at resolution time; the first
    /// pattern that matches is used exclusively.
    pub async fn add_dynamic_loader(
        &self,
        pattern: Pattern,
        loader: Arc<dyn DynamicPluginLoader>,
    ) {
        debug!(registry = %self.name, pattern = ?pattern, "dynamic plugin loader added");
        self.loaders.write().await.push((pattern, loader));
    }

    /// Whether a plugin is currently registered under `key`.
    pub async fn is_loaded(&self, key: &str) -> bool {
        self.plugins.read().await.contains_key(key)
    }

    /// Number of registered plugins.
    pub async fn len(&self) -> usize {
        self.plugins.read().await.len()
    }

    /// Whether no plugins are registered.
    pub async fn is_empty(&self) -> bool {
        self.plugins.read().await.is_empty()
    }

    /// Resolve `input` to a resource.
    ///
    /// Direct phase: resolve the lookup key and invoke the registered
    /// plugin's `build`; a build failure propagates as
    /// [`RegistryError::ResourceBuild`] with no fallback. Fallback phase
    /// (only on a lookup miss): invoke the first matching dynamic loader,
    /// retry the direct phase once, and on any failure remove whatever was
    /// registered under the lookup key during the attempt before raising
    /// [`RegistryError::PluginNotLoaded`] with the aggregated causes.
    ///
    /// Nothing is cached: every call runs the whole algorithm. Two callers
    /// racing on the same unregistered key may both reach the fallback
    /// phase; the loser of that race observes a spurious
    /// [`RegistryError::PluginNotLoaded`] even though the key becomes
    /// resolvable moments later. Callers needing stronger guarantees must
    /// serialize their first resolutions.
    pub async fn from_with(&self, input: &str, options: &O) -> Result<R, RegistryError> {
        let key = self.resolver.lookup_key(input)?;
        match self.build_resource(&key, input, options).await {
            Ok(resource) => Ok(resource),
            Err(original @ RegistryError::PluginNotLoaded { .. }) => {
                self.dynamic_fallback(&key, input, options, original).await
            }
            Err(err) => Err(err),
        }
    }

    /// Direct phase: plugin-map lookup plus `build`, with the guard dropped
    /// before awaiting the plugin.
    async fn build_resource(
        &self,
        key: &str,
        input: &str,
        options: &O,
    ) -> Result<R, RegistryError> {
        let plugin = self.plugins.read().await.get(key).cloned();
        let Some(plugin) = plugin else {
            return Err(RegistryError::PluginNotLoaded {
                key: key.to_string(),
                source: None,
            });
        };
        plugin
            .build(input, options)
            .await
            .map_err(|source| RegistryError::ResourceBuild {
                key: key.to_string(),
                source,
            })
    }

    /// Fallback phase: first matching loader, one retry, rollback on
    /// failure.
    async fn dynamic_fallback(
        &self,
        key: &str,
        input: &str,
        options: &O,
        original: RegistryError,
    ) -> Result<R, RegistryError> {
        let matched = {
            let loaders = self.loaders.read().await;
            loaders.iter().find_map(|(pattern, loader)| {
                pattern
                    .matches(input)
                    .map(|params| (params, Arc::clone(loader)))
            })
        };
        let Some((params, loader)) = matched else {
            return Err(original);
        };

        debug!(registry = %self.name, key = %key, "attempting dynamic plugin load");
        let fallback: BoxError = match loader.load(input, &params).await {
            Ok(()) => match self.build_resource(key, input, options).await {
                Ok(resource) => return Ok(resource),
                Err(err) => Box::new(err),
            },
            Err(err) => err,
        };

        // Roll back whatever the failed attempt registered so the key is
        // either fully resolvable or absent.
        self.plugins.write().await.remove(key);
        warn!(registry = %self.name, key = %key, error = %fallback, "dynamic plugin load failed");
        Err(RegistryError::PluginNotLoaded {
            key: key.to_string(),
            source: Some(Box::new(DynamicLoadError { original, fallback })),
        })
    }
}

impl<R, S> Registry<R, (), S>
where
    R: Send + 'static,
    S: Resolve,
{
    /// [`Registry::from_with`] for registries without build options.
    pub async fn from(&self, input: &str) -> Result<R, RegistryError> {
        self.from_with(input, &()).await
    }
}
