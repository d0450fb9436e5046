// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource registry and dynamic plugin resolution engine.
//!
//! Application code asks a [`Registry`] for a ready-to-use resource by key
//! or URL without knowing which concrete implementation satisfies it.
//! Resolution is two-phase: a direct plugin-map lookup, then a fallback to
//! the first matching dynamic loader, which is expected to register the
//! missing plugin as a side effect. A failed fallback rolls back any partial
//! registration and surfaces both causes.
//!
//! Registries come in two shapes: key-based ([`KeyRegistry`], lookup by the
//! input string verbatim) and URL-based ([`UrlRegistry`], lookup by scheme
//! while plugins receive the full URL). One registry is created per resource
//! kind and shared by reference.

pub mod error;
pub mod pattern;
pub mod registry;
pub mod resolve;
pub mod traits;

pub use error::{BoxError, DynamicLoadError, RegistryError};
pub use pattern::{Pattern, UrlTemplate};
pub use registry::{KeyRegistry, Registry, UrlRegistry};
pub use resolve::{KeyResolver, Resolve, UrlResolver};
pub use traits::{loader_fn, plugin_fn, DynamicPluginLoader, Params, ResourcePlugin};
