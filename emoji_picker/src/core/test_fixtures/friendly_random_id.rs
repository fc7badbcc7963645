// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{Rng, rngs::ThreadRng};
use smallstr::SmallString;
use std::fmt::Write as _;

const FACE_NAMES: [&str; 12] = [
    "grinning", "winking", "melting", "smirking", "yawning", "pouting", "zany",
    "nerd", "partying", "pleading", "saluting", "shaking",
];

const HAND_NAMES: [&str; 10] = [
    "thumbs", "wave", "victory", "pinch", "palm", "fist", "clap", "point", "vulcan",
    "heart",
];

/// Eg: `"melting-vulcan-042"`. Only used to name temp dirs, so it is not unique enough
/// for anything else.
#[must_use]
pub fn generate_friendly_random_id() -> SmallString<[u8; 32]> {
    let mut rng: ThreadRng = rand::rng();

    let face = FACE_NAMES[rng.random_range(0..FACE_NAMES.len())];
    let hand = HAND_NAMES[rng.random_range(0..HAND_NAMES.len())];
    let number: u16 = rng.random_range(0..1000);

    let mut acc = SmallString::new();
    _ = write!(acc, "{face}-{hand}-{number:03}");

    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_friendly_random_id() {
        let id = generate_friendly_random_id();
        let parts: Vec<&str> = id.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert!(FACE_NAMES.contains(&parts[0]));
        assert!(HAND_NAMES.contains(&parts[1]));
        assert_eq!(parts[2].len(), 3);
        assert!(parts[2].parse::<u16>().unwrap() < 1000);
    }
}
