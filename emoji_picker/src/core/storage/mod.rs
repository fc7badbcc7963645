// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod kv_tone_store;
pub mod tone_store;

// Re-export.
pub use kv_tone_store::*;
pub use tone_store::*;
