// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static emoji tables, one per emoji release. Each release only lists the glyphs that it
//! added, grouped by category. A catalog for a platform is built by appending releases
//! in order (see [`crate::resolve_catalog`]), so a newer catalog is always a superset of
//! an older one and existing glyphs never move.
//!
//! The rows come from the Unicode `emoji-test.txt` data, in its order:
//! - Only `fully-qualified` sequences are listed (including `U+FE0F` where the glyph
//!   needs it). Sequences that already carry a skin tone modifier, and the `Component`
//!   group, are left out.
//! - The "Smileys & Emotion" and "People & Body" groups both go into
//!   [`EmojiCategoryType::People`]. Every other group maps to one category.
//! - A row is declared with [`toned`] when its modifier sequence (the modifier right
//!   after the first code point, replacing a `U+FE0F` there) shipped no later than the
//!   release that holds the row. Glyphs whose tones came in a later release (eg:
//!   handshake, kiss) stay untoned, since the row can't change once it is in a catalog.

use crate::{EmojiCategoryType, UnicodeVersion};

// Attach sources.
pub mod emoji_11_0;
pub mod emoji_12_1;
pub mod emoji_13_0;
pub mod emoji_13_1;
pub mod emoji_14_0;
pub mod emoji_5_0;

/// One row in a static table. Converted into an owned [`crate::EmojiEntry`] when a
/// catalog is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiRow {
    pub code_points: &'static [u32],
    pub search_key: &'static str,
    pub version: UnicodeVersion,
    pub skin_tone: bool,
}

/// Rows that a release adds to one category, in display order.
pub type CategoryRows = (EmojiCategoryType, &'static [EmojiRow]);

/// The glyphs added by one emoji release.
#[derive(Debug, Clone, Copy)]
pub struct EmojiRelease {
    /// The newest emoji version that a catalog covers once this release is applied.
    pub version: UnicodeVersion,
    pub additions: &'static [CategoryRows],
}

#[must_use]
pub const fn emoji(
    code_points: &'static [u32],
    search_key: &'static str,
    version: UnicodeVersion,
) -> EmojiRow {
    EmojiRow {
        code_points,
        search_key,
        version,
        skin_tone: false,
    }
}

#[must_use]
pub const fn toned(
    code_points: &'static [u32],
    search_key: &'static str,
    version: UnicodeVersion,
) -> EmojiRow {
    EmojiRow {
        code_points,
        search_key,
        version,
        skin_tone: true,
    }
}

/// All releases, oldest first.
pub const RELEASES: [&EmojiRelease; 6] = [
    &emoji_5_0::RELEASE,
    &emoji_11_0::RELEASE,
    &emoji_12_1::RELEASE,
    &emoji_13_0::RELEASE,
    &emoji_13_1::RELEASE,
    &emoji_14_0::RELEASE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_releases_are_ordered() {
        for pair in RELEASES.windows(2) {
            assert!(pair[0].version < pair[1].version);
        }
    }

    #[test]
    fn test_rows_are_valid_and_unique() {
        let mut seen = HashSet::new();
        for release in RELEASES {
            for (_, rows) in release.additions {
                for row in *rows {
                    assert!(!row.code_points.is_empty(), "{}", row.search_key);
                    assert!(
                        row.code_points.iter().all(|&it| char::from_u32(it).is_some()),
                        "invalid scalar in {}",
                        row.search_key
                    );
                    assert!(row.version <= release.version, "{}", row.search_key);
                    assert!(
                        seen.insert(row.code_points),
                        "duplicate glyph {}",
                        row.search_key
                    );
                }
            }
        }
    }

    #[test]
    fn test_full_emoji_set_up_to_14_0() {
        let rows = || {
            RELEASES
                .into_iter()
                .flat_map(|release| release.additions.iter())
                .flat_map(|(category_type, rows)| {
                    rows.iter().map(move |it| (*category_type, it))
                })
        };

        assert_eq!(rows().count(), 1849);
        assert_eq!(rows().filter(|(_, it)| it.skin_tone).count(), 290);
        assert_eq!(
            rows()
                .filter(|(category_type, _)| *category_type == EmojiCategoryType::Flags)
                .count(),
            269
        );

        // No row carries a skin tone modifier itself.
        assert!(rows().all(|(_, it)| {
            !it.code_points
                .iter()
                .any(|code_point| (0x1F3FB..=0x1F3FF).contains(code_point))
        }));
    }

    #[test]
    fn test_base_release_covers_every_category() {
        let base = RELEASES[0];
        for category_type in EmojiCategoryType::iter() {
            let rows = base
                .additions
                .iter()
                .find(|(it, _)| *it == category_type)
                .map_or(0, |(_, rows)| rows.len());
            assert!(rows > 0, "{category_type:?} has no base rows");
        }
    }
}
