// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod choose_outcome;
pub mod index_path;
pub mod session;

// Re-export.
pub use choose_outcome::*;
pub use index_path::*;
pub use session::*;
