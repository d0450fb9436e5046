// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin and dynamic-loader contracts.
//!
//! A [`ResourcePlugin`] is a factory that turns a key (or full URL) into a
//! ready-to-use resource. A [`DynamicPluginLoader`] is invoked when no plugin
//! is registered for a key and is expected, as a side effect, to register one
//! before returning.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::BoxError;

/// Named-capture extractions from a pattern match, handed to a dynamic
/// loader.
pub type Params = HashMap<String, String>;

/// A factory for building a resource from a key.
///
/// `key` is the raw input handed to [`Registry::from`](crate::Registry::from)
/// -- for URL-based registries this is the full URL string, not the bare
/// scheme the registry looked up.
#[async_trait]
pub trait ResourcePlugin<R, O = ()>: Send + Sync {
    /// Build a resource instance.
    async fn build(&self, key: &str, options: &O) -> Result<R, BoxError>;
}

/// A lazily-invoked loader expected to register a plugin for the key being
/// resolved (or one compatible with it) as a side effect.
#[async_trait]
pub trait DynamicPluginLoader: Send + Sync {
    /// Perform the registration side effect.
    ///
    /// `input` is the raw key or URL that failed direct resolution; `params`
    /// holds the named captures extracted by the matching pattern.
    async fn load(&self, input: &str, params: &Params) -> Result<(), BoxError>;
}

struct FnPlugin<F>(F);

#[async_trait]
impl<R, O, F> ResourcePlugin<R, O> for FnPlugin<F>
where
    R: Send + 'static,
    O: Sync + 'static,
    F: for<'a> Fn(&'a str, &'a O) -> BoxFuture<'a, Result<R, BoxError>> + Send + Sync + 'static,
{
    async fn build(&self, key: &str, options: &O) -> Result<R, BoxError> {
        (self.0)(key, options).await
    }
}

/// Wrap a closure returning a boxed future as a [`ResourcePlugin`].
///
/// ```
/// use futures::FutureExt;
/// use pluggio_core::{plugin_fn, BoxError};
///
/// let plugin = plugin_fn(|key: &str, _options: &()| {
///     let key = key.to_string();
///     async move { Ok::<_, BoxError>(key.len()) }.boxed()
/// });
/// ```
pub fn plugin_fn<R, O, F>(f: F) -> Arc<dyn ResourcePlugin<R, O>>
where
    R: Send + 'static,
    O: Sync + 'static,
    F: for<'a> Fn(&'a str, &'a O) -> BoxFuture<'a, Result<R, BoxError>> + Send + Sync + 'static,
{
    Arc::new(FnPlugin(f))
}

struct FnLoader<F>(F);

#[async_trait]
impl<F> DynamicPluginLoader for FnLoader<F>
where
    F: for<'a> Fn(&'a str, &'a Params) -> BoxFuture<'a, Result<(), BoxError>>
        + Send
        + Sync
        + 'static,
{
    async fn load(&self, input: &str, params: &Params) -> Result<(), BoxError> {
        (self.0)(input, params).await
    }
}

/// Wrap a closure returning a boxed future as a [`DynamicPluginLoader`].
///
/// Clone whatever the closure needs (typically an `Arc` handle to the
/// registry) into the future before the `async move` block:
///
/// ```
/// use futures::FutureExt;
/// use pluggio_core::{loader_fn, BoxError, Params};
///
/// let loader = loader_fn(|input: &str, params: &Params| {
///     let input = input.to_string();
///     let name = params.get("name").cloned().unwrap_or_default();
///     async move {
///         let _ = (input, name);
///         Ok::<_, BoxError>(())
///     }
///     .boxed()
/// });
/// ```
pub fn loader_fn<F>(f: F) -> Arc<dyn DynamicPluginLoader>
where
    F: for<'a> Fn(&'a str, &'a Params) -> BoxFuture<'a, Result<(), BoxError>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(FnLoader(f))
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    #[tokio::test]
    async fn plugin_fn_forwards_key_and_options() {
        let plugin = plugin_fn(|key: &str, suffix: &String| {
            let built = format!("{key}{suffix}");
            async move { Ok::<_, BoxError>(built) }.boxed()
        });

        let built = plugin.build("res", &"!".to_string()).await.unwrap();
        assert_eq!(built, "res!");
    }

    #[tokio::test]
    async fn loader_fn_receives_params() {
        let loader = loader_fn(|input: &str, params: &Params| {
            let input = input.to_string();
            let name = params.get("name").cloned();
            async move {
                assert_eq!(input, "dyn-test1");
                assert_eq!(name.as_deref(), Some("test1"));
                Ok::<_, BoxError>(())
            }
            .boxed()
        });

        let mut params = Params::new();
        params.insert("name".to_string(), "test1".to_string());
        loader.load("dyn-test1", &params).await.unwrap();
    }
}
