// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use std::fmt::{Display, Formatter, Result, Write};

/// Identity of a glyph in the [`crate::ToneStore`]: its code points as upper case hex,
/// in order, joined with `-`. Eg: `[0x1F469, 0x200D, 0x1F4BB]` -> `"1F469-200D-1F4BB"`.
///
/// Two entries with the same code points share the same key (and so the same
/// remembered tone). Order is part of the key, so `[a, b]` and `[b, a]` are different
/// glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphKey(SmallString<[u8; 32]>);

impl GlyphKey {
    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }
}

impl From<&[u32]> for GlyphKey {
    fn from(code_points: &[u32]) -> Self {
        let mut acc = SmallString::new();
        for (index, code_point) in code_points.iter().enumerate() {
            if index > 0 {
                acc.push('-');
            }
            // Writing into a string can't fail.
            _ = write!(acc, "{code_point:X}");
        }
        Self(acc)
    }
}

impl Display for GlyphKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code_points: &[u32]) -> GlyphKey { GlyphKey::from(code_points) }

    #[test]
    fn test_key_format() {
        assert_eq!(key(&[0x1F44D]).as_str(), "1F44D");
        assert_eq!(
            key(&[0x1F469, 0x200D, 0x1F4BB]).to_string(),
            "1F469-200D-1F4BB"
        );
        assert_eq!(key(&[0x270C, 0xFE0F]).as_str(), "270C-FE0F");
        assert_eq!(key(&[]).as_str(), "");
    }

    #[test]
    fn test_order_is_part_of_identity() {
        let lhs = key(&[0x1F1FA, 0x1F1F8]);
        let rhs = key(&[0x1F1F8, 0x1F1FA]);
        assert!(lhs != rhs);

        // No ambiguity between one long scalar and two short ones.
        assert!(key(&[0x12, 0x3]) != key(&[0x123]));
    }
}
