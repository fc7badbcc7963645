// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_emoji_picker
//!
//! The headless core of an emoji picker. It does not draw anything. Instead it gives a
//! front end (TUI, GUI, web) everything it needs to show a categorized grid of emoji and
//! report the user's pick:
//!
//! 1. [`resolve_catalog`] maps a platform version (eg: `15.4`) to the emoji catalog that
//!    the platform can render. Newer platforms get strictly more emoji.
//! 2. [`EmojiEntry`] is one selectable glyph. Entries for people and body parts support
//!    skin tone variants.
//! 3. [`SkinTonePrefs`] remembers the tone that the user picked for each glyph, using an
//!    injected [`ToneStore`]. Use [`InMemoryToneStore`] in tests, [`KvToneStore`] to
//!    persist tones to disk, and [`SharedToneStore`] to share a store between threads.
//! 4. [`PickerSession`] is the view model. It walks the catalog by section and item,
//!    asks for a tone the first time a tone capable glyph is picked, and searches by
//!    search key.
//!
//! # Example
//!
//! ```
//! use r3bl_emoji_picker::{ChooseOutcome, InMemoryToneStore, IndexPath, PickerConfig,
//!                         PickerSession, SkinTone};
//!
//! let mut session =
//!     PickerSession::new(15.4, InMemoryToneStore::default(), PickerConfig::default());
//!
//! // 👍 is the first hit for "thumbs up", and it supports skin tones.
//! let index_path = session.search("thumbs up")[0];
//!
//! // The first pick asks for a tone.
//! assert!(matches!(
//!     session.choose(index_path),
//!     ChooseOutcome::NeedsSkinTone { .. }
//! ));
//!
//! // Once a tone is chosen, it is remembered.
//! match session.choose_with_tone(index_path, SkinTone::Medium) {
//!     ChooseOutcome::Chosen(picked) => assert_eq!(picked.emoji, "👍🏽"),
//!     _ => unreachable!(),
//! }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod picker;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use picker::*;
