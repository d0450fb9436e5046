// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Null logger adapter. Discards everything.

use std::sync::Arc;

use crate::model::{LogContext, LogLevel, Logger};

/// Logger that drops every entry.
pub struct NullLogger {
    name: String,
}

impl NullLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for NullLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, _level: LogLevel, _message: &str, _context: &LogContext) {}

    fn set_context(&self, _context: LogContext) {}

    fn child(&self, name: &str, _context: LogContext) -> Arc<dyn Logger> {
        Arc::new(Self::new(name))
    }
}
