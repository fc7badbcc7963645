// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod category_type;
pub mod dataset;
pub mod emoji_catalog;
pub mod entry;
pub mod resolver;
pub mod unicode_version;

// Re-export.
pub use category_type::*;
pub use emoji_catalog::*;
pub use entry::*;
pub use resolver::*;
pub use unicode_version::*;
