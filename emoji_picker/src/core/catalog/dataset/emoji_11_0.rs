// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glyphs added in emoji 11.0.

use super::{CategoryRows, EmojiRelease, emoji, toned};
use crate::{EmojiCategoryType::{People, Nature, FoodAndDrink, Activity, TravelAndPlaces, Objects, Symbols, Flags},
            UnicodeVersion};

const E11_0: UnicodeVersion = UnicodeVersion::new(11, 0);

pub const RELEASE: EmojiRelease = EmojiRelease {
    version: E11_0,
    additions: ADDITIONS,
};

#[rustfmt::skip]
const ADDITIONS: &[CategoryRows] = &[
    (People, &[
        emoji(&[0x1F970], "smiling face with hearts", E11_0),
        emoji(&[0x1F975], "hot face", E11_0),
        emoji(&[0x1F976], "cold face", E11_0),
        emoji(&[0x1F974], "woozy face", E11_0),
        emoji(&[0x1F973], "partying face", E11_0),
        emoji(&[0x1F97A], "pleading face", E11_0),
        toned(&[0x1F9B5], "leg", E11_0),
        toned(&[0x1F9B6], "foot", E11_0),
        emoji(&[0x1F9B7], "tooth", E11_0),
        emoji(&[0x1F9B4], "bone", E11_0),
        toned(&[0x1F468, 0x200D, 0x1F9B0], "man: red hair", E11_0),
        toned(&[0x1F468, 0x200D, 0x1F9B1], "man: curly hair", E11_0),
        toned(&[0x1F468, 0x200D, 0x1F9B3], "man: white hair", E11_0),
        toned(&[0x1F468, 0x200D, 0x1F9B2], "man: bald", E11_0),
        toned(&[0x1F469, 0x200D, 0x1F9B0], "woman: red hair", E11_0),
        toned(&[0x1F469, 0x200D, 0x1F9B1], "woman: curly hair", E11_0),
        toned(&[0x1F469, 0x200D, 0x1F9B3], "woman: white hair", E11_0),
        toned(&[0x1F469, 0x200D, 0x1F9B2], "woman: bald", E11_0),
        toned(&[0x1F9B8], "superhero", E11_0),
        toned(&[0x1F9B8, 0x200D, 0x2642, 0xFE0F], "man superhero", E11_0),
        toned(&[0x1F9B8, 0x200D, 0x2640, 0xFE0F], "woman superhero", E11_0),
        toned(&[0x1F9B9], "supervillain", E11_0),
        toned(&[0x1F9B9, 0x200D, 0x2642, 0xFE0F], "man supervillain", E11_0),
        toned(&[0x1F9B9, 0x200D, 0x2640, 0xFE0F], "woman supervillain", E11_0),
    ]),
    (Nature, &[
        emoji(&[0x1F99D], "raccoon", E11_0),
        emoji(&[0x1F999], "llama", E11_0),
        emoji(&[0x1F99B], "hippopotamus", E11_0),
        emoji(&[0x1F998], "kangaroo", E11_0),
        emoji(&[0x1F9A1], "badger", E11_0),
        emoji(&[0x1F9A2], "swan", E11_0),
        emoji(&[0x1F99A], "peacock", E11_0),
        emoji(&[0x1F99C], "parrot", E11_0),
        emoji(&[0x1F99E], "lobster", E11_0),
        emoji(&[0x1F99F], "mosquito", E11_0),
        emoji(&[0x1F9A0], "microbe", E11_0),
    ]),
    (FoodAndDrink, &[
        emoji(&[0x1F96D], "mango", E11_0),
        emoji(&[0x1F96C], "leafy green", E11_0),
        emoji(&[0x1F96F], "bagel", E11_0),
        emoji(&[0x1F9C2], "salt", E11_0),
        emoji(&[0x1F96E], "moon cake", E11_0),
        emoji(&[0x1F9C1], "cupcake", E11_0),
    ]),
    (Activity, &[
        emoji(&[0x1F9E8], "firecracker", E11_0),
        emoji(&[0x1F9E7], "red envelope", E11_0),
        emoji(&[0x1F94E], "softball", E11_0),
        emoji(&[0x1F94F], "flying disc", E11_0),
        emoji(&[0x1F94D], "lacrosse", E11_0),
        emoji(&[0x1F9E9], "puzzle piece", E11_0),
        emoji(&[0x1F9F8], "teddy bear", E11_0),
        emoji(&[0x265F, 0xFE0F], "chess pawn", E11_0),
        emoji(&[0x1F9F5], "thread", E11_0),
        emoji(&[0x1F9F6], "yarn", E11_0),
    ]),
    (TravelAndPlaces, &[
        emoji(&[0x1F9ED], "compass", E11_0),
        emoji(&[0x1F9F1], "brick", E11_0),
        emoji(&[0x1F6F9], "skateboard", E11_0),
        emoji(&[0x1F9F3], "luggage", E11_0),
    ]),
    (Objects, &[
        emoji(&[0x1F97D], "goggles", E11_0),
        emoji(&[0x1F97C], "lab coat", E11_0),
        emoji(&[0x1F97E], "hiking boot", E11_0),
        emoji(&[0x1F97F], "flat shoe", E11_0),
        emoji(&[0x1F9EE], "abacus", E11_0),
        emoji(&[0x1F9FE], "receipt", E11_0),
        emoji(&[0x1F9F0], "toolbox", E11_0),
        emoji(&[0x1F9F2], "magnet", E11_0),
        emoji(&[0x1F9EA], "test tube", E11_0),
        emoji(&[0x1F9EB], "petri dish", E11_0),
        emoji(&[0x1F9EC], "dna", E11_0),
        emoji(&[0x1F9F4], "lotion bottle", E11_0),
        emoji(&[0x1F9F7], "safety pin", E11_0),
        emoji(&[0x1F9F9], "broom", E11_0),
        emoji(&[0x1F9FA], "basket", E11_0),
        emoji(&[0x1F9FB], "roll of paper", E11_0),
        emoji(&[0x1F9FC], "soap", E11_0),
        emoji(&[0x1F9FD], "sponge", E11_0),
        emoji(&[0x1F9EF], "fire extinguisher", E11_0),
        emoji(&[0x1F9FF], "nazar amulet", E11_0),
    ]),
    (Symbols, &[
        emoji(&[0x267E, 0xFE0F], "infinity", E11_0),
    ]),
    (Flags, &[
        emoji(&[0x1F3F4, 0x200D, 0x2620, 0xFE0F], "pirate flag", E11_0),
    ]),
];
