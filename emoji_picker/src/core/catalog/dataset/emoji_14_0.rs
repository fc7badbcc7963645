// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glyphs added in emoji 14.0.

use super::{CategoryRows, EmojiRelease, emoji, toned};
use crate::{EmojiCategoryType::{People, Nature, FoodAndDrink, Activity, TravelAndPlaces, Objects, Symbols},
            UnicodeVersion};

const E14_0: UnicodeVersion = UnicodeVersion::new(14, 0);

pub const RELEASE: EmojiRelease = EmojiRelease {
    version: E14_0,
    additions: ADDITIONS,
};

#[rustfmt::skip]
const ADDITIONS: &[CategoryRows] = &[
    (People, &[
        emoji(&[0x1FAE0], "melting face", E14_0),
        emoji(&[0x1FAE2], "face with open eyes and hand over mouth", E14_0),
        emoji(&[0x1FAE3], "face with peeking eye", E14_0),
        emoji(&[0x1FAE1], "saluting face", E14_0),
        emoji(&[0x1FAE5], "dotted line face", E14_0),
        emoji(&[0x1FAE4], "face with diagonal mouth", E14_0),
        emoji(&[0x1F979], "face holding back tears", E14_0),
        toned(&[0x1FAF1], "rightwards hand", E14_0),
        toned(&[0x1FAF2], "leftwards hand", E14_0),
        toned(&[0x1FAF3], "palm down hand", E14_0),
        toned(&[0x1FAF4], "palm up hand", E14_0),
        toned(&[0x1FAF0], "hand with index finger and thumb crossed", E14_0),
        toned(&[0x1FAF5], "index pointing at the viewer", E14_0),
        toned(&[0x1FAF6], "heart hands", E14_0),
        emoji(&[0x1FAE6], "biting lip", E14_0),
        toned(&[0x1FAC5], "person with crown", E14_0),
        toned(&[0x1FAC3], "pregnant man", E14_0),
        toned(&[0x1FAC4], "pregnant person", E14_0),
        emoji(&[0x1F9CC], "troll", E14_0),
    ]),
    (Nature, &[
        emoji(&[0x1FAB8], "coral", E14_0),
        emoji(&[0x1FAB7], "lotus", E14_0),
        emoji(&[0x1FAB9], "empty nest", E14_0),
        emoji(&[0x1FABA], "nest with eggs", E14_0),
    ]),
    (FoodAndDrink, &[
        emoji(&[0x1FAD8], "beans", E14_0),
        emoji(&[0x1FAD7], "pouring liquid", E14_0),
        emoji(&[0x1FAD9], "jar", E14_0),
    ]),
    (Activity, &[
        emoji(&[0x1FAA9], "mirror ball", E14_0),
    ]),
    (TravelAndPlaces, &[
        emoji(&[0x1F6DD], "playground slide", E14_0),
        emoji(&[0x1F6DE], "wheel", E14_0),
        emoji(&[0x1F6DF], "ring buoy", E14_0),
    ]),
    (Objects, &[
        emoji(&[0x1FAAB], "low battery", E14_0),
        emoji(&[0x1FA7C], "crutch", E14_0),
        emoji(&[0x1FA7B], "x-ray", E14_0),
        emoji(&[0x1FAE7], "bubbles", E14_0),
        emoji(&[0x1FAAC], "hamsa", E14_0),
        emoji(&[0x1FAAA], "identification card", E14_0),
    ]),
    (Symbols, &[
        emoji(&[0x1F7F0], "heavy equals sign", E14_0),
    ]),
];
