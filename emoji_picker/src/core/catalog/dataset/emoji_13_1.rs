// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Emoji 13.1 mostly added ZWJ sequences of existing glyphs.

use super::{CategoryRows, EmojiRelease, emoji, toned};
use crate::{EmojiCategoryType::People, UnicodeVersion};

const E13_1: UnicodeVersion = UnicodeVersion::new(13, 1);

pub const RELEASE: EmojiRelease = EmojiRelease {
    version: E13_1,
    additions: ADDITIONS,
};

#[rustfmt::skip]
const ADDITIONS: &[CategoryRows] = &[
    (People, &[
        emoji(&[0x1F636, 0x200D, 0x1F32B, 0xFE0F], "face in clouds", E13_1),
        emoji(&[0x1F62E, 0x200D, 0x1F4A8], "face exhaling", E13_1),
        emoji(&[0x1F635, 0x200D, 0x1F4AB], "face with spiral eyes", E13_1),
        emoji(&[0x2764, 0xFE0F, 0x200D, 0x1F525], "heart on fire", E13_1),
        emoji(&[0x2764, 0xFE0F, 0x200D, 0x1FA79], "mending heart", E13_1),
        toned(&[0x1F9D4, 0x200D, 0x2642, 0xFE0F], "man: beard", E13_1),
        toned(&[0x1F9D4, 0x200D, 0x2640, 0xFE0F], "woman: beard", E13_1),
    ]),
];
