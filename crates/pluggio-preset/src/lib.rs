// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset wiring for Pluggio registries.
//!
//! A preset installs dynamic loaders that defer adapter registration until
//! the first `from` call for a scheme, instead of registering every adapter
//! up front:
//!
//! ```
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//!
//! let storage = Arc::new(pluggio_storage::registry());
//! let loggers = Arc::new(pluggio_logger::registry());
//! pluggio_preset::standard(&storage, &loggers).await;
//!
//! // Nothing is registered yet; the first resolution loads the plugin.
//! let handle = storage.from("file://./data").await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use futures::FutureExt;
use pluggio_core::{loader_fn, BoxError, Params, Pattern, ResourcePlugin, UrlRegistry, UrlTemplate};
use pluggio_logger::{ConsoleLoggerPlugin, LoggerRegistry, MemoryLoggerPlugin, NullLoggerPlugin};
use pluggio_storage::{
    FileStoragePlugin, MemoryStoragePlugin, StorageRegistry, TmpStoragePlugin,
};
use tracing::debug;

/// Install a dynamic loader that registers `plugin` under `scheme` the
/// first time a URL with that scheme is resolved.
pub async fn defer_plugin<R>(
    registry: &Arc<UrlRegistry<R>>,
    scheme: &str,
    plugin: Arc<dyn ResourcePlugin<R>>,
) where
    R: Send + 'static,
{
    let handle = Arc::clone(registry);
    let scheme_owned = scheme.to_string();
    registry
        .add_dynamic_loader(
            Pattern::Url(UrlTemplate::new().scheme(scheme)),
            loader_fn(move |_input: &str, _params: &Params| {
                let handle = Arc::clone(&handle);
                let scheme = scheme_owned.clone();
                let plugin = Arc::clone(&plugin);
                async move {
                    handle.load(scheme, plugin).await?;
                    Ok::<_, BoxError>(())
                }
                .boxed()
            }),
        )
        .await;
}

/// The production wiring: file-backed storage and console logging.
pub async fn standard(storage: &Arc<StorageRegistry>, loggers: &Arc<LoggerRegistry>) {
    defer_plugin(storage, "file", Arc::new(FileStoragePlugin)).await;
    defer_plugin(loggers, "console", Arc::new(ConsoleLoggerPlugin)).await;
    debug!("standard preset installed");
}

/// The test wiring: ephemeral storage and inspectable or silent logging.
pub async fn testing(storage: &Arc<StorageRegistry>, loggers: &Arc<LoggerRegistry>) {
    defer_plugin(storage, "memory", Arc::new(MemoryStoragePlugin)).await;
    defer_plugin(storage, "tmp", Arc::new(TmpStoragePlugin)).await;
    defer_plugin(loggers, "memory", Arc::new(MemoryLoggerPlugin)).await;
    defer_plugin(loggers, "null", Arc::new(NullLoggerPlugin)).await;
    debug!("testing preset installed");
}
