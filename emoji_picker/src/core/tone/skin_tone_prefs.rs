// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EmojiEntry, SkinTone, ToneStore};

/// Remembers the skin tone of each glyph in a [`ToneStore`], and renders entries with
/// their remembered tone.
///
/// The tone is keyed by [`EmojiEntry::glyph_key`], not by the entry instance, so the
/// same glyph shown in two places (or two sessions sharing a store) shares its tone.
/// Entries that don't support skin tones never have a tone: [`Self::set_tone`] ignores
/// them and [`Self::selected_tone`] always returns [None] for them.
#[derive(Debug, Default, Clone)]
pub struct SkinTonePrefs<S: ToneStore> {
    store: S,
}

impl<S: ToneStore> SkinTonePrefs<S> {
    #[must_use]
    pub fn new(store: S) -> Self { Self { store } }

    #[must_use]
    pub fn store(&self) -> &S { &self.store }

    #[must_use]
    pub fn into_store(self) -> S { self.store }

    /// The remembered tone, including [`SkinTone::None`] when the user explicitly picked
    /// the default glyph. [None] means the user was never asked.
    #[must_use]
    pub fn selected_tone(&self, entry: &EmojiEntry) -> Option<SkinTone> {
        if !entry.supports_skin_tone {
            return None;
        }
        self.store
            .get(&entry.glyph_key())
            .and_then(SkinTone::from_stored)
    }

    /// Gates the selection of tone capable glyphs: until this returns `true` the front
    /// end must ask the user for a tone before the glyph can be picked.
    #[must_use]
    pub fn has_chosen_tone_before(&self, entry: &EmojiEntry) -> bool {
        self.selected_tone(entry).is_some()
    }

    /// Remember `tone` for every instance of this glyph. No-op for entries without skin
    /// tone support.
    pub fn set_tone(&mut self, entry: &EmojiEntry, tone: SkinTone) {
        if !entry.supports_skin_tone {
            tracing::trace!(
                message = "🎨 Ignore skin tone for glyph without tone support",
                search_key = %entry.search_key.as_str()
            );
            return;
        }

        let key = entry.glyph_key();
        self.store.set(&key, tone.to_stored());

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🎨 Remember skin tone",
            key = %key,
            tone = ?tone
        );
    }

    /// The display string of `entry`, with its remembered tone applied.
    #[must_use]
    pub fn render(&self, entry: &EmojiEntry) -> String {
        entry.render_with_tone(self.selected_tone(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryToneStore, SharedToneStore, UnicodeVersion, decode_code_points};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    const E1: UnicodeVersion = UnicodeVersion::new(1, 0);

    fn thumbs_up() -> EmojiEntry { EmojiEntry::with_skin_tone(&[0x1F44D], "thumbs up", E1) }

    fn grinning() -> EmojiEntry { EmojiEntry::new(&[0x1F600], "grinning face", E1) }

    #[test]
    fn test_thumbs_up_medium() {
        let mut prefs = SkinTonePrefs::new(InMemoryToneStore::default());
        let entry = thumbs_up();

        assert_eq!(prefs.render(&entry), "👍");
        assert!(!prefs.has_chosen_tone_before(&entry));
        assert_eq!(prefs.selected_tone(&entry), None);

        prefs.set_tone(&entry, SkinTone::Medium);

        assert_eq!(prefs.render(&entry), decode_code_points(&[0x1F44D, 0x1F3FD]));
        assert_eq!(prefs.render(&entry), "👍🏽");
        assert!(prefs.has_chosen_tone_before(&entry));
        assert_eq!(prefs.selected_tone(&entry), Some(SkinTone::Medium));
    }

    #[test]
    fn test_choosing_none_counts_as_a_choice() {
        let mut prefs = SkinTonePrefs::new(InMemoryToneStore::default());
        let entry = thumbs_up();

        prefs.set_tone(&entry, SkinTone::Dark);
        prefs.set_tone(&entry, SkinTone::None);

        assert!(prefs.has_chosen_tone_before(&entry));
        assert_eq!(prefs.selected_tone(&entry), Some(SkinTone::None));
        assert_eq!(prefs.render(&entry), entry.base_string());
    }

    #[test]
    fn test_glyph_without_tone_support_ignores_tones() {
        let mut prefs = SkinTonePrefs::new(InMemoryToneStore::default());
        let entry = grinning();

        for tone in SkinTone::iter() {
            prefs.set_tone(&entry, tone);
            assert_eq!(prefs.render(&entry), "😀");
            assert_eq!(prefs.selected_tone(&entry), None);
            assert!(!prefs.has_chosen_tone_before(&entry));
        }
        assert!(prefs.store().inner.is_empty());
    }

    #[test]
    fn test_tone_is_shared_by_glyph_identity() {
        let mut prefs = SkinTonePrefs::new(InMemoryToneStore::default());
        let first = thumbs_up();
        let second = EmojiEntry::with_skin_tone(&[0x1F44D], "another thumbs up", E1);
        let other = EmojiEntry::with_skin_tone(&[0x1F44E], "thumbs down", E1);

        prefs.set_tone(&first, SkinTone::Light);

        assert!(prefs.has_chosen_tone_before(&second));
        assert_eq!(prefs.render(&second), "👍🏻");
        assert!(!prefs.has_chosen_tone_before(&other));
    }

    #[test]
    fn test_sessions_sharing_a_store() {
        let store = SharedToneStore::new(InMemoryToneStore::default());
        let mut session_1 = SkinTonePrefs::new(store.clone());
        let session_2 = SkinTonePrefs::new(store);

        session_1.set_tone(&thumbs_up(), SkinTone::MediumDark);

        assert!(session_2.has_chosen_tone_before(&thumbs_up()));
        assert_eq!(session_2.render(&thumbs_up()), "👍🏾");
    }

    #[test]
    fn test_garbage_in_store_reads_as_never_chosen() {
        let mut store = InMemoryToneStore::default();
        store.set(&thumbs_up().glyph_key(), 42);
        let prefs = SkinTonePrefs::new(store);

        assert!(!prefs.has_chosen_tone_before(&thumbs_up()));
        assert_eq!(prefs.render(&thumbs_up()), "👍");
    }
}
