// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{GlyphKey, SkinTone, UnicodeVersion, core::catalog::dataset::EmojiRow};
use smallstr::SmallString;
use smallvec::SmallVec;

/// Most glyphs are 1 to 4 Unicode scalars long, so they stay on the stack. Longer ZWJ
/// sequences spill to the heap.
pub type CodePoints = SmallVec<[u32; 4]>;

/// Machine key used for search and lookup. It is not localized and does not change
/// when a skin tone is applied.
pub type SearchKey = SmallString<[u8; 32]>;

/// One selectable glyph.
///
/// The skin tone that the user picked for this glyph is not stored here. It lives in a
/// [`crate::ToneStore`] keyed by [`EmojiEntry::glyph_key`], so every instance of the
/// same glyph shares it. Use [`crate::SkinTonePrefs`] to render an entry with its
/// remembered tone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmojiEntry {
    pub code_points: CodePoints,
    /// Only human and body glyphs that have Fitzpatrick modifier variants.
    pub supports_skin_tone: bool,
    pub search_key: SearchKey,
    /// Provenance only. Catalogs are filtered by platform version, never per entry.
    pub min_unicode_version: UnicodeVersion,
}

impl EmojiEntry {
    #[must_use]
    pub fn new(
        code_points: &[u32],
        search_key: &str,
        min_unicode_version: UnicodeVersion,
    ) -> Self {
        Self {
            code_points: CodePoints::from_slice(code_points),
            supports_skin_tone: false,
            search_key: SearchKey::from(search_key),
            min_unicode_version,
        }
    }

    #[must_use]
    pub fn with_skin_tone(
        code_points: &[u32],
        search_key: &str,
        min_unicode_version: UnicodeVersion,
    ) -> Self {
        Self {
            supports_skin_tone: true,
            ..Self::new(code_points, search_key, min_unicode_version)
        }
    }

    #[must_use]
    pub fn glyph_key(&self) -> GlyphKey { GlyphKey::from(self.code_points.as_slice()) }

    /// The glyph without any skin tone modifier.
    #[must_use]
    pub fn base_string(&self) -> String { decode_code_points(&self.code_points) }

    /// Render this glyph with the given tone. The tone is ignored when this entry does
    /// not support skin tones, or when it is [`SkinTone::None`]. Otherwise the tone's
    /// modifier is inserted right after the first code point, eg:
    /// `[0x1F44D]` + [`SkinTone::Medium`] -> `[0x1F44D, 0x1F3FD]` -> "👍🏽".
    #[must_use]
    pub fn render_with_tone(&self, maybe_tone: Option<SkinTone>) -> String {
        let maybe_modifier = maybe_tone
            .filter(|_| self.supports_skin_tone)
            .and_then(SkinTone::modifier);

        match maybe_modifier {
            Some(modifier) if !self.code_points.is_empty() => {
                let mut acc = self.code_points.clone();
                acc.insert(1, modifier);
                decode_code_points(&acc)
            }
            _ => self.base_string(),
        }
    }
}

impl From<&EmojiRow> for EmojiEntry {
    fn from(row: &EmojiRow) -> Self {
        if row.skin_tone {
            Self::with_skin_tone(row.code_points, row.search_key, row.version)
        } else {
            Self::new(row.code_points, row.search_key, row.version)
        }
    }
}

/// Decode each integer as one Unicode scalar, in order. Decoding stops at the first
/// value that is not a valid scalar (eg: a surrogate, or anything above `0x10FFFF`), so
/// the result may be truncated, but this never fails.
#[must_use]
pub fn decode_code_points(code_points: &[u32]) -> String {
    code_points
        .iter()
        .map_while(|&code_point| char::from_u32(code_point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    const E1: UnicodeVersion = UnicodeVersion::new(1, 0);

    #[test]
    fn test_decode_stops_at_first_invalid_scalar() {
        assert_eq!(decode_code_points(&[0x1F600]), "😀");
        assert_eq!(decode_code_points(&[0x1F600, 0xD800, 0x1F601]), "😀");
        assert_eq!(decode_code_points(&[0x1F600, 0x0011_0000]), "😀");
        assert_eq!(decode_code_points(&[0xDFFF]), "");
        assert_eq!(decode_code_points(&[]), "");
    }

    #[test]
    fn test_render_inserts_modifier_after_first_code_point() {
        let thumbs_up = EmojiEntry::with_skin_tone(&[0x1F44D], "thumbs up", E1);
        assert_eq!(thumbs_up.render_with_tone(None), "👍");
        assert_eq!(thumbs_up.render_with_tone(Some(SkinTone::None)), "👍");
        assert_eq!(thumbs_up.render_with_tone(Some(SkinTone::Medium)), "👍🏽");
        assert_eq!(
            thumbs_up.render_with_tone(Some(SkinTone::Dark)),
            decode_code_points(&[0x1F44D, 0x1F3FF])
        );

        // ZWJ sequence: the modifier goes between the person and the joiner.
        let technologist =
            EmojiEntry::with_skin_tone(&[0x1F469, 0x200D, 0x1F4BB], "woman technologist", E1);
        assert_eq!(
            technologist.render_with_tone(Some(SkinTone::Light)),
            decode_code_points(&[0x1F469, 0x1F3FB, 0x200D, 0x1F4BB])
        );
    }

    #[test]
    fn test_render_ignores_tone_without_skin_tone_support() {
        let grinning = EmojiEntry::new(&[0x1F600], "grinning face", E1);
        for tone in SkinTone::iter() {
            assert_eq!(grinning.render_with_tone(Some(tone)), "😀");
        }
    }

    #[test]
    fn test_render_with_tone_truncates_invalid_tail() {
        let broken = EmojiEntry::with_skin_tone(&[0x1F44D, 0xD800, 0x1F44D], "broken", E1);
        assert_eq!(broken.render_with_tone(Some(SkinTone::Light)), "👍🏻");
        assert_eq!(broken.render_with_tone(None), "👍");

        let empty = EmojiEntry::with_skin_tone(&[], "empty", E1);
        assert_eq!(empty.render_with_tone(Some(SkinTone::Light)), "");
    }

    #[test]
    fn test_row_conversion() {
        let row = EmojiRow {
            code_points: &[0x1F44B],
            search_key: "waving hand",
            version: E1,
            skin_tone: true,
        };
        let entry = EmojiEntry::from(&row);
        assert!(entry.supports_skin_tone);
        assert_eq!(entry.search_key.as_str(), "waving hand");
        assert_eq!(entry.glyph_key().as_str(), "1F44B");
    }
}
