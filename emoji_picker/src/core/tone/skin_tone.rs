// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter, FromRepr};

/// Skin tone choices for glyphs that support them. Every variant except
/// [`SkinTone::None`] maps to one Fitzpatrick modifier (`U+1F3FB..=U+1F3FF`).
///
/// The discriminant is the integer that is persisted in a [`crate::ToneStore`]. It
/// starts at `1` so that `0` (the default of most key/value stores) never decodes to a
/// tone. Do not renumber.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum SkinTone {
    /// The default yellow glyph. Choosing it is still a choice.
    #[default]
    None = 1,
    Light = 2,
    MediumLight = 3,
    Medium = 4,
    MediumDark = 5,
    Dark = 6,
}

impl SkinTone {
    /// The modifier code point to insert after the first code point of a glyph.
    #[must_use]
    pub fn modifier(self) -> Option<u32> {
        match self {
            SkinTone::None => None,
            SkinTone::Light => Some(0x1F3FB),
            SkinTone::MediumLight => Some(0x1F3FC),
            SkinTone::Medium => Some(0x1F3FD),
            SkinTone::MediumDark => Some(0x1F3FE),
            SkinTone::Dark => Some(0x1F3FF),
        }
    }

    /// Integer written to the tone store.
    #[must_use]
    pub fn to_stored(self) -> i64 { i64::from(self as u8) }

    /// Inverse of [`SkinTone::to_stored`]. Any other value reads as "never chosen".
    #[must_use]
    pub fn from_stored(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(SkinTone::None, None, 1)]
    #[test_case(SkinTone::Light, Some(0x1F3FB), 2)]
    #[test_case(SkinTone::MediumLight, Some(0x1F3FC), 3)]
    #[test_case(SkinTone::Medium, Some(0x1F3FD), 4)]
    #[test_case(SkinTone::MediumDark, Some(0x1F3FE), 5)]
    #[test_case(SkinTone::Dark, Some(0x1F3FF), 6)]
    fn test_modifier_and_stored_value(tone: SkinTone, modifier: Option<u32>, stored: i64) {
        assert_eq!(tone.modifier(), modifier);
        assert_eq!(tone.to_stored(), stored);
        assert_eq!(SkinTone::from_stored(stored), Some(tone));
    }

    #[test]
    fn test_unknown_stored_values_are_rejected() {
        assert_eq!(SkinTone::COUNT, 6);
        for value in [0, 7, -1, 256 + 1, i64::MAX] {
            assert_eq!(SkinTone::from_stored(value), None);
        }
    }

    #[test]
    fn test_modifiers_are_distinct_and_valid() {
        let modifiers: Vec<u32> = SkinTone::iter().filter_map(SkinTone::modifier).collect();
        assert_eq!(modifiers, vec![0x1F3FB, 0x1F3FC, 0x1F3FD, 0x1F3FE, 0x1F3FF]);
        assert!(modifiers.iter().all(|&it| char::from_u32(it).is_some()));
    }
}
