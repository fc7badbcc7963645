// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glyphs added in emoji 12.0 and 12.1. Platforms shipped both at once.

use super::{CategoryRows, EmojiRelease, emoji, toned};
use crate::{EmojiCategoryType::{People, Nature, FoodAndDrink, Activity, TravelAndPlaces, Objects, Symbols},
            UnicodeVersion};

const E12_0: UnicodeVersion = UnicodeVersion::new(12, 0);
const E12_1: UnicodeVersion = UnicodeVersion::new(12, 1);

pub const RELEASE: EmojiRelease = EmojiRelease {
    version: E12_1,
    additions: ADDITIONS,
};

#[rustfmt::skip]
const ADDITIONS: &[CategoryRows] = &[
    (People, &[
        emoji(&[0x1F971], "yawning face", E12_0),
        emoji(&[0x1F90E], "brown heart", E12_0),
        emoji(&[0x1F90D], "white heart", E12_0),
        toned(&[0x1F90F], "pinching hand", E12_0),
        emoji(&[0x1F9BE], "mechanical arm", E12_0),
        emoji(&[0x1F9BF], "mechanical leg", E12_0),
        toned(&[0x1F9BB], "ear with hearing aid", E12_0),
        toned(&[0x1F9D1, 0x200D, 0x1F9B0], "person: red hair", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F9B1], "person: curly hair", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F9B3], "person: white hair", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F9B2], "person: bald", E12_1),
        toned(&[0x1F9CF], "deaf person", E12_0),
        toned(&[0x1F9CF, 0x200D, 0x2642, 0xFE0F], "deaf man", E12_0),
        toned(&[0x1F9CF, 0x200D, 0x2640, 0xFE0F], "deaf woman", E12_0),
        toned(&[0x1F9D1, 0x200D, 0x2695, 0xFE0F], "health worker", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F393], "student", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F3EB], "teacher", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x2696, 0xFE0F], "judge", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F33E], "farmer", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F373], "cook", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F527], "mechanic", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F3ED], "factory worker", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F4BC], "office worker", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F52C], "scientist", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F4BB], "technologist", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F3A4], "singer", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F3A8], "artist", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x2708, 0xFE0F], "pilot", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F680], "astronaut", E12_1),
        toned(&[0x1F9D1, 0x200D, 0x1F692], "firefighter", E12_1),
        toned(&[0x1F9CD], "person standing", E12_0),
        toned(&[0x1F9CD, 0x200D, 0x2642, 0xFE0F], "man standing", E12_0),
        toned(&[0x1F9CD, 0x200D, 0x2640, 0xFE0F], "woman standing", E12_0),
        toned(&[0x1F9CE], "person kneeling", E12_0),
        toned(&[0x1F9CE, 0x200D, 0x2642, 0xFE0F], "man kneeling", E12_0),
        toned(&[0x1F9CE, 0x200D, 0x2640, 0xFE0F], "woman kneeling", E12_0),
        toned(&[0x1F9D1, 0x200D, 0x1F9AF], "person with white cane", E12_1),
        toned(&[0x1F468, 0x200D, 0x1F9AF], "man with white cane", E12_0),
        toned(&[0x1F469, 0x200D, 0x1F9AF], "woman with white cane", E12_0),
        toned(&[0x1F9D1, 0x200D, 0x1F9BC], "person in motorized wheelchair", E12_1),
        toned(&[0x1F468, 0x200D, 0x1F9BC], "man in motorized wheelchair", E12_0),
        toned(&[0x1F469, 0x200D, 0x1F9BC], "woman in motorized wheelchair", E12_0),
        toned(&[0x1F9D1, 0x200D, 0x1F9BD], "person in manual wheelchair", E12_1),
        toned(&[0x1F468, 0x200D, 0x1F9BD], "man in manual wheelchair", E12_0),
        toned(&[0x1F469, 0x200D, 0x1F9BD], "woman in manual wheelchair", E12_0),
        emoji(&[0x1F9D1, 0x200D, 0x1F91D, 0x200D, 0x1F9D1], "people holding hands", E12_0),
    ]),
    (Nature, &[
        emoji(&[0x1F9A7], "orangutan", E12_0),
        emoji(&[0x1F9AE], "guide dog", E12_0),
        emoji(&[0x1F415, 0x200D, 0x1F9BA], "service dog", E12_0),
        emoji(&[0x1F9A5], "sloth", E12_0),
        emoji(&[0x1F9A6], "otter", E12_0),
        emoji(&[0x1F9A8], "skunk", E12_0),
        emoji(&[0x1F9A9], "flamingo", E12_0),
        emoji(&[0x1F9AA], "oyster", E12_0),
    ]),
    (FoodAndDrink, &[
        emoji(&[0x1F9C4], "garlic", E12_0),
        emoji(&[0x1F9C5], "onion", E12_0),
        emoji(&[0x1F9C7], "waffle", E12_0),
        emoji(&[0x1F9C6], "falafel", E12_0),
        emoji(&[0x1F9C8], "butter", E12_0),
        emoji(&[0x1F9C3], "beverage box", E12_0),
        emoji(&[0x1F9C9], "mate", E12_0),
        emoji(&[0x1F9CA], "ice", E12_0),
    ]),
    (Activity, &[
        emoji(&[0x1F93F], "diving mask", E12_0),
        emoji(&[0x1FA80], "yo-yo", E12_0),
        emoji(&[0x1FA81], "kite", E12_0),
    ]),
    (TravelAndPlaces, &[
        emoji(&[0x1F6D5], "hindu temple", E12_0),
        emoji(&[0x1F9BD], "manual wheelchair", E12_0),
        emoji(&[0x1F9BC], "motorized wheelchair", E12_0),
        emoji(&[0x1F6FA], "auto rickshaw", E12_0),
        emoji(&[0x1FA82], "parachute", E12_0),
        emoji(&[0x1FA90], "ringed planet", E12_0),
    ]),
    (Objects, &[
        emoji(&[0x1F9BA], "safety vest", E12_0),
        emoji(&[0x1F97B], "sari", E12_0),
        emoji(&[0x1FA71], "one-piece swimsuit", E12_0),
        emoji(&[0x1FA72], "briefs", E12_0),
        emoji(&[0x1FA73], "shorts", E12_0),
        emoji(&[0x1FA70], "ballet shoes", E12_0),
        emoji(&[0x1FA95], "banjo", E12_0),
        emoji(&[0x1FA94], "diya lamp", E12_0),
        emoji(&[0x1FA93], "axe", E12_0),
        emoji(&[0x1F9AF], "white cane", E12_0),
        emoji(&[0x1FA78], "drop of blood", E12_0),
        emoji(&[0x1FA79], "adhesive bandage", E12_0),
        emoji(&[0x1FA7A], "stethoscope", E12_0),
        emoji(&[0x1FA91], "chair", E12_0),
        emoji(&[0x1FA92], "razor", E12_0),
    ]),
    (Symbols, &[
        emoji(&[0x1F7E0], "orange circle", E12_0),
        emoji(&[0x1F7E1], "yellow circle", E12_0),
        emoji(&[0x1F7E2], "green circle", E12_0),
        emoji(&[0x1F7E3], "purple circle", E12_0),
        emoji(&[0x1F7E4], "brown circle", E12_0),
        emoji(&[0x1F7E5], "red square", E12_0),
        emoji(&[0x1F7E7], "orange square", E12_0),
        emoji(&[0x1F7E8], "yellow square", E12_0),
        emoji(&[0x1F7E9], "green square", E12_0),
        emoji(&[0x1F7E6], "blue square", E12_0),
        emoji(&[0x1F7EA], "purple square", E12_0),
        emoji(&[0x1F7EB], "brown square", E12_0),
    ]),
];
