// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Emoji (Unicode) release that introduced a glyph, or that a whole catalog covers.
/// Field order matters, the derived [Ord] compares `major` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnicodeVersion {
    pub major: u8,
    pub minor: u8,
}

impl UnicodeVersion {
    #[must_use]
    pub const fn new(major: u8, minor: u8) -> Self { Self { major, minor } }
}

impl Display for UnicodeVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_and_display() {
        assert!(UnicodeVersion::new(12, 1) > UnicodeVersion::new(12, 0));
        assert!(UnicodeVersion::new(13, 0) > UnicodeVersion::new(12, 9));
        assert_eq!(UnicodeVersion::new(13, 1).to_string(), "13.1");
    }
}
