// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The view model behind an emoji picker grid. A front end binds to it like this:
//!
//! 1. Lay out [`PickerSession::number_of_sections`] sections, one per category, each
//!    with [`PickerSession::number_of_items`] cells. Draw each cell with
//!    [`PickerSession::rendered_at`], and each header by localizing
//!    [`PickerSession::section_header_key`].
//! 2. When a cell is tapped, call [`PickerSession::choose`].
//!    - [`ChooseOutcome::Chosen`] carries the string to insert.
//!    - [`ChooseOutcome::NeedsSkinTone`] means "show the tone popup" using
//!      [`PickerSession::tone_variants`], and then call
//!      [`PickerSession::choose_with_tone`] with the user's tone.
//! 3. Category tabs use [`PickerSession::select_category`] and
//!    [`PickerSession::section_for`] to scroll the grid.

use crate::{ChooseOutcome, EmojiCatalog, EmojiCategoryType, EmojiEntry, IndexPath,
            PickedEmoji, PickerConfig, SkinTone, SkinTonePrefs, ToneStore,
            resolve_catalog};
use strum::IntoEnumIterator;

#[derive(Debug)]
pub struct PickerSession<S: ToneStore> {
    catalog: &'static EmojiCatalog,
    prefs: SkinTonePrefs<S>,
    config: PickerConfig,
    selected_category: EmojiCategoryType,
    last_picked: Option<PickedEmoji>,
}

impl<S: ToneStore> PickerSession<S> {
    /// `platform_version` is the one the host reports. It is ignored if
    /// [`PickerConfig::platform_version_override`] is set.
    #[must_use]
    pub fn new(platform_version: f64, tone_store: S, config: PickerConfig) -> Self {
        let platform_version = config.effective_platform_version(platform_version);
        let catalog = resolve_catalog(platform_version);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🪟 Open picker session",
            platform_version = platform_version,
            emoji_version = %catalog.emoji_version(),
            initial_category = ?config.initial_category
        );

        Self {
            catalog,
            prefs: SkinTonePrefs::new(tone_store),
            selected_category: config.initial_category,
            config,
            last_picked: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'static EmojiCatalog { self.catalog }

    #[must_use]
    pub fn config(&self) -> &PickerConfig { &self.config }

    #[must_use]
    pub fn prefs(&self) -> &SkinTonePrefs<S> { &self.prefs }

    #[must_use]
    pub fn into_tone_store(self) -> S { self.prefs.into_store() }

    #[must_use]
    pub fn number_of_sections(&self) -> usize { self.catalog.categories().len() }

    /// Zero for a section that doesn't exist.
    #[must_use]
    pub fn number_of_items(&self, section: usize) -> usize {
        self.catalog
            .categories()
            .get(section)
            .map_or(0, |category| category.len())
    }

    #[must_use]
    pub fn entry_at(&self, index_path: IndexPath) -> Option<&'static EmojiEntry> {
        let catalog: &'static EmojiCatalog = self.catalog;
        catalog
            .categories()
            .get(index_path.section)?
            .entries
            .get(index_path.item)
    }

    #[must_use]
    pub fn category_at(&self, section: usize) -> Option<EmojiCategoryType> {
        self.catalog
            .categories()
            .get(section)
            .map(|category| category.category_type)
    }

    /// Localization key for the header of `section`, eg: `"emotionsAndPeople"`.
    #[must_use]
    pub fn section_header_key(&self, section: usize) -> Option<&'static str> {
        self.category_at(section)
            .map(EmojiCategoryType::localization_key)
    }

    /// The cell text, with the remembered skin tone applied.
    #[must_use]
    pub fn rendered_at(&self, index_path: IndexPath) -> Option<String> {
        self.entry_at(index_path)
            .map(|entry| self.prefs.render(entry))
    }

    #[must_use]
    pub fn selected_category(&self) -> EmojiCategoryType { self.selected_category }

    /// Select a tab. Returns the section the grid should scroll to.
    pub fn select_category(&mut self, category_type: EmojiCategoryType) -> usize {
        self.selected_category = category_type;
        self.section_for(category_type)
    }

    /// Section that holds `category_type`. Every catalog has all the categories in tab
    /// order, so this is also [`EmojiCategoryType::ordinal`].
    #[must_use]
    pub fn section_for(&self, category_type: EmojiCategoryType) -> usize {
        self.catalog
            .categories()
            .iter()
            .position(|it| it.category_type == category_type)
            .unwrap_or_else(|| category_type.ordinal())
    }

    /// The most recent [`ChooseOutcome::Chosen`] pick of this session.
    #[must_use]
    pub fn last_picked(&self) -> Option<&PickedEmoji> { self.last_picked.as_ref() }

    /// The user tapped the cell at `index_path`.
    pub fn choose(&mut self, index_path: IndexPath) -> ChooseOutcome {
        let Some(entry) = self.entry_at(index_path) else {
            tracing::debug!(message = "👆 Choose nothing", index_path = %index_path);
            return ChooseOutcome::NotFound;
        };

        if entry.supports_skin_tone && !self.prefs.has_chosen_tone_before(entry) {
            tracing::debug!(
                message = "👆 Ask for skin tone",
                index_path = %index_path,
                search_key = %entry.search_key.as_str()
            );
            return ChooseOutcome::NeedsSkinTone {
                index_path,
                base: entry.base_string(),
            };
        }

        let category_type = self
            .category_at(index_path.section)
            .unwrap_or(self.selected_category);
        let picked = PickedEmoji {
            emoji: self.prefs.render(entry),
            search_key: entry.search_key.clone(),
            category_type,
            dismiss_picker: self.config.dismiss_after_choosing,
            feedback: self.config.choice_feedback_enabled,
        };

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "👆 Choose emoji",
            index_path = %index_path,
            emoji = %picked.emoji,
            dismiss_picker = picked.dismiss_picker
        );

        self.last_picked = Some(picked.clone());
        ChooseOutcome::Chosen(picked)
    }

    /// The user picked `tone` in the tone popup for the cell at `index_path`. The tone is
    /// remembered for this glyph, and then the cell is chosen.
    pub fn choose_with_tone(&mut self, index_path: IndexPath, tone: SkinTone) -> ChooseOutcome {
        let Some(entry) = self.entry_at(index_path) else {
            return ChooseOutcome::NotFound;
        };
        self.prefs.set_tone(entry, tone);
        self.choose(index_path)
    }

    /// One rendering per [`SkinTone`], in popup order. Empty for glyphs without skin
    /// tone support, or an index path that doesn't exist.
    #[must_use]
    pub fn tone_variants(&self, index_path: IndexPath) -> Vec<(SkinTone, String)> {
        match self.entry_at(index_path) {
            Some(entry) if entry.supports_skin_tone => SkinTone::iter()
                .map(|tone| (tone, entry.render_with_tone(Some(tone))))
                .collect(),
            _ => vec![],
        }
    }

    /// Case insensitive substring match on the search key, in display order. A blank
    /// query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<IndexPath> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return vec![];
        }

        let mut acc = vec![];
        for (section, category) in self.catalog.categories().iter().enumerate() {
            for (item, entry) in category.entries.iter().enumerate() {
                if entry.search_key.to_lowercase().contains(&needle) {
                    acc.push(IndexPath::new(section, item));
                }
            }
        }

        tracing::trace!(message = "🔎 Search", query = query, hits = acc.len());

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryToneStore;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const THUMBS_UP: IndexPath = IndexPath::new(0, 156);
    const GRINNING: IndexPath = IndexPath::new(0, 0);

    fn session(platform_version: f64) -> PickerSession<InMemoryToneStore> {
        PickerSession::new(
            platform_version,
            InMemoryToneStore::default(),
            PickerConfig::default(),
        )
    }

    #[test]
    fn test_grid_shape() {
        let it = session(15.4);
        assert_eq!(it.number_of_sections(), 8);
        assert_eq!(it.section_header_key(0), Some("emotionsAndPeople"));
        assert_eq!(it.section_header_key(7), Some("flags"));
        assert_eq!(it.section_header_key(8), None);

        let total: usize = (0..it.number_of_sections())
            .map(|section| it.number_of_items(section))
            .sum();
        assert_eq!(total, it.catalog().len());
        assert_eq!(it.number_of_items(8), 0);

        assert_eq!(it.entry_at(THUMBS_UP).unwrap().search_key.as_str(), "thumbs up");
        assert_eq!(it.rendered_at(GRINNING).as_deref(), Some("😀"));
        assert_eq!(it.rendered_at(IndexPath::new(0, 10_000)), None);
    }

    #[test]
    fn test_choose_plain_glyph() {
        let mut it = session(15.4);
        assert_eq!(it.last_picked(), None);

        let outcome = it.choose(GRINNING);
        let picked = outcome.picked().unwrap();
        assert_eq!(picked.emoji, "😀");
        assert_eq!(picked.category_type, EmojiCategoryType::People);
        assert!(picked.dismiss_picker);
        assert!(picked.feedback);
        assert_eq!(it.last_picked(), Some(picked));
    }

    #[test]
    fn test_choose_asks_for_tone_once() {
        let mut it = session(15.4);

        assert_eq!(
            it.choose(THUMBS_UP),
            ChooseOutcome::NeedsSkinTone {
                index_path: THUMBS_UP,
                base: "👍".to_string(),
            }
        );
        assert_eq!(it.last_picked(), None);

        let picked = it.choose_with_tone(THUMBS_UP, SkinTone::MediumDark);
        assert_eq!(picked.picked().unwrap().emoji, "👍🏾");

        // Remembered from now on.
        assert_eq!(it.choose(THUMBS_UP).picked().unwrap().emoji, "👍🏾");
        assert_eq!(it.rendered_at(THUMBS_UP).as_deref(), Some("👍🏾"));
    }

    #[test]
    fn test_choose_with_tone_on_plain_glyph_ignores_tone() {
        let mut it = session(15.4);
        let outcome = it.choose_with_tone(GRINNING, SkinTone::Dark);
        assert_eq!(outcome.picked().unwrap().emoji, "😀");
        assert!(it.into_tone_store().inner.is_empty());
    }

    #[test]
    fn test_not_found() {
        let mut it = session(15.4);
        assert_eq!(it.choose(IndexPath::new(9, 0)), ChooseOutcome::NotFound);
        assert_eq!(
            it.choose_with_tone(IndexPath::new(0, 10_000), SkinTone::Light),
            ChooseOutcome::NotFound
        );
        assert!(it.tone_variants(IndexPath::new(9, 0)).is_empty());
    }

    #[test]
    fn test_tone_variants() {
        let it = session(15.4);
        let variants = it.tone_variants(THUMBS_UP);
        let rendered: Vec<&str> = variants.iter().map(|(_, it)| it.as_str()).collect();
        assert_eq!(rendered, vec!["👍", "👍🏻", "👍🏼", "👍🏽", "👍🏾", "👍🏿"]);
        assert_eq!(variants[0].0, SkinTone::None);

        assert!(it.tone_variants(GRINNING).is_empty());
    }

    #[test]
    fn test_config_flows_into_picks() {
        let config = PickerConfig {
            dismiss_after_choosing: false,
            choice_feedback_enabled: false,
            platform_version_override: Some(12.0),
            initial_category: EmojiCategoryType::Flags,
            ..Default::default()
        };
        let mut it = PickerSession::new(99.0, InMemoryToneStore::default(), config);

        assert_eq!(it.catalog().emoji_version().to_string(), "5.0");
        assert_eq!(it.selected_category(), EmojiCategoryType::Flags);

        let picked = it.choose(GRINNING).picked().cloned().unwrap();
        assert!(!picked.dismiss_picker);
        assert!(!picked.feedback);
    }

    #[test]
    fn test_select_category() {
        let mut it = session(15.4);
        assert_eq!(it.selected_category(), EmojiCategoryType::People);

        for category_type in EmojiCategoryType::iter() {
            let section = it.select_category(category_type);
            assert_eq!(it.selected_category(), category_type);
            assert_eq!(it.category_at(section), Some(category_type));
            assert_eq!(it.section_for(category_type), section);
        }
    }

    #[test_case("thumbs up", &[IndexPath::new(0, 156)] ; "exact")]
    #[test_case("THUMBS", &[IndexPath::new(0, 156), IndexPath::new(0, 157)] ; "case insensitive")]
    #[test_case("  thumbs down ", &[IndexPath::new(0, 157)] ; "trimmed")]
    #[test_case("", &[] ; "empty")]
    #[test_case("   ", &[] ; "blank")]
    #[test_case("no such emoji", &[] ; "no hits")]
    fn test_search(query: &str, expected: &[IndexPath]) {
        assert_eq!(session(15.4).search(query), expected);
    }

    #[test]
    fn test_search_respects_catalog() {
        assert_eq!(session(15.4).search("melting face").len(), 1);
        assert!(session(13.2).search("melting face").is_empty());

        let hits = session(15.4).search("face");
        let mut sorted = hits.clone();
        sorted.sort();
        assert_eq!(hits, sorted);
    }
}
