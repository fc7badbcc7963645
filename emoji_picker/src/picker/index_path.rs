// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Address of one cell in the picker grid. `section` is the category (see
/// [`crate::EmojiCategoryType::ordinal`]), `item` is the position of the entry inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self { Self { section, item } }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self { Self::new(section, item) }
}

impl Display for IndexPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}
