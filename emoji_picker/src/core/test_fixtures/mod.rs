// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures shared by the unit tests and the integration tests in `tests/`. Not part of
//! the public API.

// Attach sources.
pub mod friendly_random_id;
pub mod temp_tone_store_dir;

// Re-export.
pub use friendly_random_id::*;
pub use temp_tone_store_dir::*;
