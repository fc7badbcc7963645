// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

/// The tabs of the picker. The declaration order is the display and tab order, and it
/// must never change, since [`EmojiCategoryType::ordinal`] is used as the section index.
///
/// The strum `serialize` value of each variant is its localization key (see
/// [`EmojiCategoryType::localization_key`]). The front end turns this key into a
/// localized label.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum EmojiCategoryType {
    #[default]
    #[strum(serialize = "emotionsAndPeople")]
    People,
    #[strum(serialize = "animalsAndNature")]
    Nature,
    #[strum(serialize = "foodAndDrinks")]
    FoodAndDrink,
    #[strum(serialize = "activities")]
    Activity,
    #[strum(serialize = "travellingAndPlaces")]
    TravelAndPlaces,
    #[strum(serialize = "items")]
    Objects,
    #[strum(serialize = "symbols")]
    Symbols,
    #[strum(serialize = "flags")]
    Flags,
}

impl EmojiCategoryType {
    /// Stable, non localized key for this category, eg: `"emotionsAndPeople"`.
    #[must_use]
    pub fn localization_key(self) -> &'static str { self.into() }

    /// Position of this category in the picker, `0..=7`.
    #[must_use]
    pub fn ordinal(self) -> usize { self as usize }

    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> { Self::iter().nth(ordinal) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::EnumCount;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        assert_eq!(EmojiCategoryType::COUNT, 8);
        for (index, it) in EmojiCategoryType::iter().enumerate() {
            assert_eq!(it.ordinal(), index);
            assert_eq!(EmojiCategoryType::from_ordinal(index), Some(it));
        }
        assert_eq!(EmojiCategoryType::from_ordinal(8), None);
        assert_eq!(EmojiCategoryType::Flags.ordinal(), 7);
    }

    #[test]
    fn test_localization_keys() {
        let keys: Vec<&str> = EmojiCategoryType::iter()
            .map(EmojiCategoryType::localization_key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "emotionsAndPeople",
                "animalsAndNature",
                "foodAndDrinks",
                "activities",
                "travellingAndPlaces",
                "items",
                "symbols",
                "flags",
            ]
        );
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&EmojiCategoryType::TravelAndPlaces).unwrap();
        assert_eq!(json, "\"travelAndPlaces\"");
        let it: EmojiCategoryType = serde_json::from_str("\"foodAndDrink\"").unwrap();
        assert_eq!(it, EmojiCategoryType::FoodAndDrink);
    }
}
