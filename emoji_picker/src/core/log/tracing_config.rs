// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure tracing output for a host (or a test) that embeds the picker.
///
/// Fields:
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging, and
///   nothing is installed.
/// - `writer`: [`DisplayPreference`] to choose where the logs go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer: DisplayPreference,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

/// Logging is **disabled** by default.
impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            writer: DisplayPreference::default(),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(writer: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
