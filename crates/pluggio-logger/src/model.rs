// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The pluggable logger contract.

use std::collections::HashMap;
use std::sync::Arc;

/// Structured context attached to log entries.
pub type LogContext = HashMap<String, serde_json::Value>;

/// Log severities, labelled the way the adapters emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Default,
    Debug,
    Info,
    Notice,
    Warning,
    Error,
}

impl LogLevel {
    /// The severity label adapters attach to entries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named logger with structured context.
///
/// `set_context` merges fields into the logger's ambient context, which is
/// applied to every subsequent entry (ambient fields win over per-call
/// context). `child` derives a logger with its own name and an extended
/// copy of the ambient context.
pub trait Logger: Send + Sync {
    /// The logger's name.
    fn name(&self) -> &str;

    /// Emit an entry at an explicit severity.
    fn log(&self, level: LogLevel, message: &str, context: &LogContext);

    /// Merge fields into the ambient context.
    fn set_context(&self, context: LogContext);

    /// Derive a child logger with extra ambient context.
    fn child(&self, name: &str, context: LogContext) -> Arc<dyn Logger>;

    fn debug(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Debug, message, context);
    }

    fn info(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Info, message, context);
    }

    fn notice(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Notice, message, context);
    }

    fn warn(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Warning, message, context);
    }

    fn error(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Error, message, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_match_the_wire_format() {
        assert_eq!(LogLevel::Default.to_string(), "DEFAULT");
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }
}
