// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EmojiCategoryType, IndexPath, SearchKey};

/// What happened when the user tapped a cell. See [`crate::PickerSession::choose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// The index path doesn't address an entry in the catalog.
    NotFound,
    /// The glyph supports skin tones, and the user has never picked one for it. Show the
    /// tone popup (see [`crate::PickerSession::tone_variants`]) and then call
    /// [`crate::PickerSession::choose_with_tone`].
    NeedsSkinTone { index_path: IndexPath, base: String },
    Chosen(PickedEmoji),
}

/// The glyph that the front end should insert, plus what it should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedEmoji {
    /// Rendered with the remembered skin tone.
    pub emoji: String,
    pub search_key: SearchKey,
    pub category_type: EmojiCategoryType,
    /// Close the picker after this pick.
    pub dismiss_picker: bool,
    /// Give haptic (or visual) feedback for this pick.
    pub feedback: bool,
}

impl ChooseOutcome {
    #[must_use]
    pub fn picked(&self) -> Option<&PickedEmoji> {
        match self {
            ChooseOutcome::Chosen(it) => Some(it),
            _ => None,
        }
    }
}
