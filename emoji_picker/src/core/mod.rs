// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Connect to source file.
pub mod catalog;
pub mod config;
pub mod error;
pub mod log;
pub mod storage;
pub mod tone;

#[doc(hidden)]
pub mod test_fixtures;

// Re-export.
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use log::*;
pub use storage::*;
pub use tone::*;
