// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable logging for Pluggio.
//!
//! Defines the [`Logger`] contract, the console/memory/null adapters, and
//! the registry plugins that build them from URLs:
//!
//! ```
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use pluggio_logger::{registry, ConsoleLoggerPlugin, LogContext, Logger};
//!
//! let loggers = registry();
//! loggers.load("console", Arc::new(ConsoleLoggerPlugin)).await?;
//!
//! let logger = loggers.from("console:").await?;
//! logger.info("ready", &LogContext::new());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod model;
pub mod plugins;

use std::sync::Arc;

use pluggio_core::{Registry, UrlRegistry};

pub use adapters::{ConsoleLogger, LogEntry, MemoryLogger, NullLogger};
pub use model::{LogContext, LogLevel, Logger};
pub use plugins::{ConsoleLoggerPlugin, MemoryLoggerPlugin, NullLoggerPlugin};

/// The URL-based registry resolving loggers.
pub type LoggerRegistry = UrlRegistry<Arc<dyn Logger>>;

/// Create the logger registry. One instance is meant to be created at
/// startup and shared by reference among all call sites.
pub fn registry() -> LoggerRegistry {
    Registry::url_based("Logger")
}
