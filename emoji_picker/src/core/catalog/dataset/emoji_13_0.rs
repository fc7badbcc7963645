// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glyphs added in emoji 13.0.

use super::{CategoryRows, EmojiRelease, emoji, toned};
use crate::{EmojiCategoryType::{People, Nature, FoodAndDrink, Activity, TravelAndPlaces, Objects, Symbols, Flags},
            UnicodeVersion};

const E13_0: UnicodeVersion = UnicodeVersion::new(13, 0);

pub const RELEASE: EmojiRelease = EmojiRelease {
    version: E13_0,
    additions: ADDITIONS,
};

#[rustfmt::skip]
const ADDITIONS: &[CategoryRows] = &[
    (People, &[
        emoji(&[0x1F972], "smiling face with tear", E13_0),
        emoji(&[0x1F978], "disguised face", E13_0),
        toned(&[0x1F90C], "pinched fingers", E13_0),
        emoji(&[0x1FAC0], "anatomical heart", E13_0),
        emoji(&[0x1FAC1], "lungs", E13_0),
        toned(&[0x1F977], "ninja", E13_0),
        toned(&[0x1F935, 0x200D, 0x2642, 0xFE0F], "man in tuxedo", E13_0),
        toned(&[0x1F935, 0x200D, 0x2640, 0xFE0F], "woman in tuxedo", E13_0),
        toned(&[0x1F470, 0x200D, 0x2642, 0xFE0F], "man with veil", E13_0),
        toned(&[0x1F470, 0x200D, 0x2640, 0xFE0F], "woman with veil", E13_0),
        toned(&[0x1F469, 0x200D, 0x1F37C], "woman feeding baby", E13_0),
        toned(&[0x1F468, 0x200D, 0x1F37C], "man feeding baby", E13_0),
        toned(&[0x1F9D1, 0x200D, 0x1F37C], "person feeding baby", E13_0),
        toned(&[0x1F9D1, 0x200D, 0x1F384], "Mx Claus", E13_0),
        emoji(&[0x1FAC2], "people hugging", E13_0),
    ]),
    (Nature, &[
        emoji(&[0x1F408, 0x200D, 0x2B1B], "black cat", E13_0),
        emoji(&[0x1F9AC], "bison", E13_0),
        emoji(&[0x1F9A3], "mammoth", E13_0),
        emoji(&[0x1F9AB], "beaver", E13_0),
        emoji(&[0x1F43B, 0x200D, 0x2744, 0xFE0F], "polar bear", E13_0),
        emoji(&[0x1F9A4], "dodo", E13_0),
        emoji(&[0x1FAB6], "feather", E13_0),
        emoji(&[0x1F9AD], "seal", E13_0),
        emoji(&[0x1FAB2], "beetle", E13_0),
        emoji(&[0x1FAB3], "cockroach", E13_0),
        emoji(&[0x1FAB0], "fly", E13_0),
        emoji(&[0x1FAB1], "worm", E13_0),
        emoji(&[0x1FAB4], "potted plant", E13_0),
    ]),
    (FoodAndDrink, &[
        emoji(&[0x1FAD0], "blueberries", E13_0),
        emoji(&[0x1FAD2], "olive", E13_0),
        emoji(&[0x1FAD1], "bell pepper", E13_0),
        emoji(&[0x1FAD3], "flatbread", E13_0),
        emoji(&[0x1FAD4], "tamale", E13_0),
        emoji(&[0x1FAD5], "fondue", E13_0),
        emoji(&[0x1FAD6], "teapot", E13_0),
        emoji(&[0x1F9CB], "bubble tea", E13_0),
    ]),
    (Activity, &[
        emoji(&[0x1FA84], "magic wand", E13_0),
        emoji(&[0x1FA85], "piñata", E13_0),
        emoji(&[0x1FA86], "nesting dolls", E13_0),
        emoji(&[0x1FAA1], "sewing needle", E13_0),
        emoji(&[0x1FAA2], "knot", E13_0),
    ]),
    (TravelAndPlaces, &[
        emoji(&[0x1FAA8], "rock", E13_0),
        emoji(&[0x1FAB5], "wood", E13_0),
        emoji(&[0x1F6D6], "hut", E13_0),
        emoji(&[0x1F6FB], "pickup truck", E13_0),
        emoji(&[0x1F6FC], "roller skate", E13_0),
    ]),
    (Objects, &[
        emoji(&[0x1FA74], "thong sandal", E13_0),
        emoji(&[0x1FA96], "military helmet", E13_0),
        emoji(&[0x1FA97], "accordion", E13_0),
        emoji(&[0x1FA98], "long drum", E13_0),
        emoji(&[0x1FA99], "coin", E13_0),
        emoji(&[0x1FA83], "boomerang", E13_0),
        emoji(&[0x1FA9A], "carpentry saw", E13_0),
        emoji(&[0x1FA9B], "screwdriver", E13_0),
        emoji(&[0x1FA9D], "hook", E13_0),
        emoji(&[0x1FA9C], "ladder", E13_0),
        emoji(&[0x1F6D7], "elevator", E13_0),
        emoji(&[0x1FA9E], "mirror", E13_0),
        emoji(&[0x1FA9F], "window", E13_0),
        emoji(&[0x1FAA0], "plunger", E13_0),
        emoji(&[0x1FAA4], "mouse trap", E13_0),
        emoji(&[0x1FAA3], "bucket", E13_0),
        emoji(&[0x1FAA5], "toothbrush", E13_0),
        emoji(&[0x1FAA6], "headstone", E13_0),
        emoji(&[0x1FAA7], "placard", E13_0),
    ]),
    (Symbols, &[
        emoji(&[0x26A7, 0xFE0F], "transgender symbol", E13_0),
    ]),
    (Flags, &[
        emoji(&[0x1F3F3, 0xFE0F, 0x200D, 0x26A7, 0xFE0F], "transgender flag", E13_0),
    ]),
];
