// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry plugins wrapping the logger adapters.
//!
//! The full URL the caller resolved becomes the logger's name, so
//! `Logger.from("console:")` and `from("console://worker")` yield
//! distinguishable loggers.

use std::sync::Arc;

use async_trait::async_trait;
use pluggio_core::{BoxError, ResourcePlugin};

use crate::adapters::{ConsoleLogger, MemoryLogger, NullLogger};
use crate::model::Logger;

/// Builds [`ConsoleLogger`] for `console:` URLs.
pub struct ConsoleLoggerPlugin;

#[async_trait]
impl ResourcePlugin<Arc<dyn Logger>> for ConsoleLoggerPlugin {
    async fn build(&self, key: &str, _options: &()) -> Result<Arc<dyn Logger>, BoxError> {
        Ok(Arc::new(ConsoleLogger::new(key)))
    }
}

/// Builds [`MemoryLogger`] for `memory:` URLs.
pub struct MemoryLoggerPlugin;

#[async_trait]
impl ResourcePlugin<Arc<dyn Logger>> for MemoryLoggerPlugin {
    async fn build(&self, key: &str, _options: &()) -> Result<Arc<dyn Logger>, BoxError> {
        Ok(Arc::new(MemoryLogger::new(key)))
    }
}

/// Builds [`NullLogger`] for `null:` URLs.
pub struct NullLoggerPlugin;

#[async_trait]
impl ResourcePlugin<Arc<dyn Logger>> for NullLoggerPlugin {
    async fn build(&self, key: &str, _options: &()) -> Result<Arc<dyn Logger>, BoxError> {
        Ok(Arc::new(NullLogger::new(key)))
    }
}
