// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod glyph_key;
pub mod skin_tone;
pub mod skin_tone_prefs;

// Re-export.
pub use glyph_key::*;
pub use skin_tone::*;
pub use skin_tone_prefs::*;
