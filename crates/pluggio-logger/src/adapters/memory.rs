// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory logger adapter. Records entries for later inspection, mainly in
//! tests.

use std::sync::{Arc, Mutex};

use crate::model::{LogContext, LogLevel, Logger};

/// A recorded log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub severity: LogLevel,
    pub message: String,
    pub name: String,
    pub context: LogContext,
}

/// Logger appending entries to an in-memory buffer.
pub struct MemoryLogger {
    name: String,
    fields: Mutex<LogContext>,
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_fields(name, LogContext::new())
    }

    pub fn with_fields(name: impl Into<String>, fields: LogContext) -> Self {
        Self {
            name: name.into(),
            fields: Mutex::new(fields),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Logger for MemoryLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: LogLevel, message: &str, context: &LogContext) {
        let mut merged = context.clone();
        {
            let fields = self.fields.lock().unwrap_or_else(|e| e.into_inner());
            merged.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LogEntry {
                severity: level,
                message: message.to_string(),
                name: self.name.clone(),
                context: merged,
            });
    }

    fn set_context(&self, context: LogContext) {
        self.fields
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(context);
    }

    fn child(&self, name: &str, context: LogContext) -> Arc<dyn Logger> {
        let mut fields = self.fields.lock().unwrap_or_else(|e| e.into_inner()).clone();
        fields.extend(context);
        Arc::new(Self::with_fields(name, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_severity_message_and_merged_context() {
        let logger = MemoryLogger::new("test");
        logger.set_context(LogContext::from([(
            "service".to_string(),
            serde_json::json!("pluggio"),
        )]));

        let call_context = LogContext::from([("attempt".to_string(), serde_json::json!(1))]);
        logger.warn("disk nearly full", &call_context);

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogLevel::Warning);
        assert_eq!(entries[0].message, "disk nearly full");
        assert_eq!(entries[0].context["service"], serde_json::json!("pluggio"));
        assert_eq!(entries[0].context["attempt"], serde_json::json!(1));
    }

    #[test]
    fn ambient_fields_win_over_call_context() {
        let logger = MemoryLogger::new("test");
        logger.set_context(LogContext::from([(
            "env".to_string(),
            serde_json::json!("prod"),
        )]));

        let call_context = LogContext::from([("env".to_string(), serde_json::json!("dev"))]);
        logger.info("ready", &call_context);

        assert_eq!(logger.entries()[0].context["env"], serde_json::json!("prod"));
    }

    #[test]
    fn child_inherits_and_extends_ambient_context() {
        let logger = MemoryLogger::new("parent");
        logger.set_context(LogContext::from([(
            "service".to_string(),
            serde_json::json!("pluggio"),
        )]));

        let child = logger.child(
            "child",
            LogContext::from([("component".to_string(), serde_json::json!("resolver"))]),
        );
        assert_eq!(child.name(), "child");
        // The child logs into its own buffer; the parent's stays empty.
        child.info("hello", &LogContext::new());
        assert!(logger.entries().is_empty());
    }
}
