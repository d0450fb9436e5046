// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete logger adapters.

pub mod console;
pub mod memory;
pub mod null;

pub use console::ConsoleLogger;
pub use memory::{LogEntry, MemoryLogger};
pub use null::NullLogger;
