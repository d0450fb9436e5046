// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete storage adapters.

pub mod file;
pub mod memory;
pub mod tmp;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use tmp::TmpStorage;
