// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EmojiCategoryType, EmojiEntry, UnicodeVersion};

/// One tab's worth of glyphs, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCategory {
    pub category_type: EmojiCategoryType,
    pub entries: Vec<EmojiEntry>,
}

impl EmojiCategory {
    #[must_use]
    pub fn new(category_type: EmojiCategoryType) -> Self {
        Self {
            category_type,
            entries: Vec::new(),
        }
    }

    /// Key for the front end to look up the localized tab label.
    #[must_use]
    pub fn localization_key(&self) -> &'static str {
        self.category_type.localization_key()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// All the categories for one platform, one per [`EmojiCategoryType`], ordered by
/// [`EmojiCategoryType::ordinal`]. Catalogs are only built by
/// [`crate::resolve_catalog`] and are immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCatalog {
    emoji_version: UnicodeVersion,
    categories: Vec<EmojiCategory>,
}

impl EmojiCatalog {
    pub(crate) fn new(emoji_version: UnicodeVersion, categories: Vec<EmojiCategory>) -> Self {
        Self {
            emoji_version,
            categories,
        }
    }

    /// Newest emoji release that this catalog covers.
    #[must_use]
    pub fn emoji_version(&self) -> UnicodeVersion { self.emoji_version }

    #[must_use]
    pub fn categories(&self) -> &[EmojiCategory] { &self.categories }

    #[must_use]
    pub fn category(&self, category_type: EmojiCategoryType) -> Option<&EmojiCategory> {
        self.categories.get(category_type.ordinal())
    }

    /// Total number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize { self.categories.iter().map(EmojiCategory::len).sum() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Every entry, in display order, paired with its category.
    pub fn iter_entries(&self) -> impl Iterator<Item = (EmojiCategoryType, &EmojiEntry)> {
        self.categories.iter().flat_map(|category| {
            category
                .entries
                .iter()
                .map(move |entry| (category.category_type, entry))
        })
    }

    /// Exact match on [`EmojiEntry::search_key`].
    #[must_use]
    pub fn find_by_search_key(&self, search_key: &str) -> Option<&EmojiEntry> {
        self.iter_entries()
            .map(|(_, entry)| entry)
            .find(|entry| entry.search_key.as_str() == search_key)
    }
}
