// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Maps a platform version to the emoji catalog that the platform can render.
//!
//! The mapping is an ordered table of brackets. Each bracket has an inclusive lower
//! bound, and the bracket with the greatest lower bound that is `<=` the platform version
//! wins. The first bracket starts at negative infinity so every version resolves:
//!
//! | platform version | emoji release |
//! |------------------|---------------|
//! | below `12.1`     | 5.0           |
//! | `12.1..13.2`     | 11.0          |
//! | `13.2..14.2`     | 12.1          |
//! | `14.2..14.5`     | 13.0          |
//! | `14.5..15.4`     | 13.1          |
//! | `15.4` and up    | 14.0          |
//!
//! To support a new platform release, add its emoji additions to
//! [`crate::core::catalog::dataset`] and append a bracket to [`CATALOG_BRACKETS`].

use crate::{EmojiCatalog, EmojiCategory, EmojiCategoryType, EmojiEntry,
            core::catalog::dataset::{EmojiRelease, RELEASES}};
use std::sync::LazyLock;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy)]
pub struct CatalogBracket {
    /// Inclusive.
    pub min_platform_version: f64,
    pub release: &'static EmojiRelease,
}

pub const CATALOG_BRACKETS: [CatalogBracket; 6] = [
    CatalogBracket {
        min_platform_version: f64::NEG_INFINITY,
        release: RELEASES[0],
    },
    CatalogBracket {
        min_platform_version: 12.1,
        release: RELEASES[1],
    },
    CatalogBracket {
        min_platform_version: 13.2,
        release: RELEASES[2],
    },
    CatalogBracket {
        min_platform_version: 14.2,
        release: RELEASES[3],
    },
    CatalogBracket {
        min_platform_version: 14.5,
        release: RELEASES[4],
    },
    CatalogBracket {
        min_platform_version: 15.4,
        release: RELEASES[5],
    },
];

/// One catalog per bracket, built on first use. Bracket `n` holds the releases `0..=n`.
static CATALOGS: LazyLock<Vec<EmojiCatalog>> = LazyLock::new(build_catalogs);

fn build_catalogs() -> Vec<EmojiCatalog> {
    let mut categories: Vec<EmojiCategory> =
        EmojiCategoryType::iter().map(EmojiCategory::new).collect();

    let mut acc = Vec::with_capacity(CATALOG_BRACKETS.len());
    for bracket in &CATALOG_BRACKETS {
        for (category_type, rows) in bracket.release.additions {
            if let Some(category) = categories.get_mut(category_type.ordinal()) {
                category.entries.extend(rows.iter().map(EmojiEntry::from));
            }
        }
        acc.push(EmojiCatalog::new(bracket.release.version, categories.clone()));
    }

    tracing::debug!(
        message = "🗂️ Built emoji catalogs",
        count = acc.len(),
        newest_len = acc.last().map_or(0, EmojiCatalog::len)
    );

    acc
}

/// Index into [`CATALOG_BRACKETS`] for the given platform version. `NaN` compares false
/// against every bound, so it lands in the floor bracket.
#[must_use]
pub fn resolve_bracket_index(platform_version: f64) -> usize {
    CATALOG_BRACKETS
        .iter()
        .rposition(|bracket| bracket.min_platform_version <= platform_version)
        .unwrap_or(0)
}

#[must_use]
pub fn resolve_bracket(platform_version: f64) -> &'static CatalogBracket {
    &CATALOG_BRACKETS[resolve_bracket_index(platform_version)]
}

/// The emoji catalog for the given platform version, eg: `15.4`. This never fails:
/// versions below the lowest bracket get the floor catalog, and versions above the
/// highest bracket get the newest one. The same bracket always returns the same
/// `&'static` catalog.
#[must_use]
pub fn resolve_catalog(platform_version: f64) -> &'static EmojiCatalog {
    let index = resolve_bracket_index(platform_version);
    let catalog = &CATALOGS[index];

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔎 Resolve emoji catalog",
        platform_version = platform_version,
        bracket = index,
        emoji_version = %catalog.emoji_version()
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnicodeVersion;
    use pretty_assertions::assert_eq;
    use strum::EnumCount;
    use test_case::test_case;

    #[test_case(-1.0, 5, 0; "negative version")]
    #[test_case(0.0, 5, 0; "zero")]
    #[test_case(12.0, 5, 0; "below lowest bound")]
    #[test_case(12.1, 11, 0; "lowest bound")]
    #[test_case(13.1, 11, 0; "end of first bracket")]
    #[test_case(13.2, 12, 1; "ios 13 point 2")]
    #[test_case(14.1, 12, 1; "end of 13 point 2 bracket")]
    #[test_case(14.2, 13, 0; "ios 14 point 2")]
    #[test_case(14.3, 13, 0; "inside 14 point 2 bracket")]
    #[test_case(14.4, 13, 0; "end of 14 point 2 bracket")]
    #[test_case(14.5, 13, 1; "ios 14 point 5")]
    #[test_case(15.3, 13, 1; "end of 14 point 5 bracket")]
    #[test_case(15.4, 14, 0; "ios 15 point 4")]
    #[test_case(99.0, 14, 0; "future platform")]
    #[test_case(f64::INFINITY, 14, 0; "infinity")]
    #[test_case(f64::NAN, 5, 0; "nan")]
    fn test_resolve_emoji_version(platform_version: f64, major: u8, minor: u8) {
        assert_eq!(
            resolve_catalog(platform_version).emoji_version(),
            UnicodeVersion::new(major, minor)
        );
    }

    #[test]
    fn test_same_bracket_returns_same_catalog() {
        let it = resolve_catalog(14.3);
        assert!(std::ptr::eq(it, resolve_catalog(14.2)));
        assert!(std::ptr::eq(it, resolve_catalog(14.4)));
        assert_eq!(it, resolve_catalog(14.2));

        assert_eq!(resolve_catalog(99.0), resolve_catalog(15.4));
        assert_eq!(resolve_catalog(1.0), resolve_catalog(12.0));
        assert!(resolve_catalog(13.2) != resolve_catalog(13.1));
    }

    #[test]
    fn test_every_catalog_has_eight_ordered_non_empty_categories() {
        for bracket in &CATALOG_BRACKETS {
            let catalog = resolve_catalog(bracket.min_platform_version);
            assert_eq!(catalog.categories().len(), EmojiCategoryType::COUNT);
            for (category, category_type) in
                catalog.categories().iter().zip(EmojiCategoryType::iter())
            {
                assert_eq!(category.category_type, category_type);
                assert!(!category.is_empty(), "{category_type:?} is empty");
            }
        }
    }

    #[test]
    fn test_newer_catalogs_extend_older_ones() {
        for pair in CATALOG_BRACKETS.windows(2) {
            let older = resolve_catalog(pair[0].min_platform_version);
            let newer = resolve_catalog(pair[1].min_platform_version);
            assert!(newer.len() > older.len());
            assert!(newer.emoji_version() > older.emoji_version());
            for (old, new) in older.categories().iter().zip(newer.categories()) {
                assert_eq!(old.entries.as_slice(), &new.entries[..old.entries.len()]);
            }
        }
    }

    #[test]
    fn test_bracket_bounds_are_increasing() {
        for pair in CATALOG_BRACKETS.windows(2) {
            assert!(pair[0].min_platform_version < pair[1].min_platform_version);
        }
        assert_eq!(resolve_bracket(14.4).min_platform_version, 14.2);
    }

    #[test]
    fn test_lookup_helpers() {
        let catalog = resolve_catalog(15.4);
        let thumbs_up = catalog.find_by_search_key("thumbs up").unwrap();
        assert_eq!(thumbs_up.code_points.as_slice(), &[0x1F44D]);
        assert!(thumbs_up.supports_skin_tone);

        assert!(catalog.find_by_search_key("melting face").is_some());
        assert!(resolve_catalog(15.3).find_by_search_key("melting face").is_none());

        let flags = catalog.category(EmojiCategoryType::Flags).unwrap();
        assert_eq!(flags.localization_key(), "flags");
        assert_eq!(catalog.iter_entries().count(), catalog.len());
    }
}
