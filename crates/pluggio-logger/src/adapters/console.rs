// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console logger adapter. Entries go to stdout, warnings and errors to
//! stderr.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::model::{LogContext, LogLevel, Logger};

/// Logger writing human-readable lines to the process console.
pub struct ConsoleLogger {
    name: String,
    fields: Mutex<LogContext>,
}

impl ConsoleLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_fields(name, LogContext::new())
    }

    /// A console logger with pre-set ambient fields.
    pub fn with_fields(name: impl Into<String>, fields: LogContext) -> Self {
        Self {
            name: name.into(),
            fields: Mutex::new(fields),
        }
    }

    fn merged(&self, context: &LogContext) -> LogContext {
        let mut merged = context.clone();
        let fields = self.fields.lock().unwrap_or_else(|e| e.into_inner());
        merged.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

impl Logger for ConsoleLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: LogLevel, message: &str, context: &LogContext) {
        let merged = self.merged(context);
        let fields = serde_json::to_string(&merged).unwrap_or_else(|_| "{}".to_string());
        let line = format!(
            "{} {} {}@{} {}",
            Utc::now().to_rfc3339(),
            level,
            message,
            self.name,
            fields
        );
        match level {
            LogLevel::Warning | LogLevel::Error => eprintln!("{line}"),
            _ => println!("{line}"),
        }
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
