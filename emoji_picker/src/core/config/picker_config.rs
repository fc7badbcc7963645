// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Picker settings that a host can load from JSON. Every key is optional, missing keys
//! take their defaults. Eg:
//!
//! ```json
//! {
//!   "dismissAfterChoosing": false,
//!   "initialCategory": "foodAndDrink",
//!   "toneStore": { "dbFolderPath": "/home/me/.config/edi/emoji_kv" }
//! }
//! ```

use crate::{EmojiCategoryType, PickerError};
use miette::IntoDiagnostic;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Ask the front end to close the picker once an emoji is picked.
    pub dismiss_after_choosing: bool,
    /// Ask the front end to give feedback (haptic or visual) when an emoji is picked.
    pub choice_feedback_enabled: bool,
    /// Use this instead of the platform version reported by the host.
    pub platform_version_override: Option<f64>,
    /// Tab that is selected when the picker opens.
    pub initial_category: EmojiCategoryType,
    pub tone_store: ToneStoreConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            dismiss_after_choosing: true,
            choice_feedback_enabled: true,
            platform_version_override: None,
            initial_category: EmojiCategoryType::default(),
            tone_store: ToneStoreConfig::default(),
        }
    }
}

/// Where [`crate::KvToneStore`] keeps its data. [None] uses the default folder and
/// bucket names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToneStoreConfig {
    pub db_folder_path: Option<String>,
    pub bucket_name: Option<String>,
}

impl PickerConfig {
    /// # Errors
    ///
    /// Returns [`PickerError::ConfigParse`] if the JSON is malformed or a value has the
    /// wrong type.
    pub fn try_from_json_str(json: &str) -> miette::Result<Self> {
        let it = serde_json::from_str(json)
            .map_err(|source| PickerError::ConfigParse { source })?;
        Ok(it)
    }

    /// # Errors
    ///
    /// Returns [`PickerError::ConfigRead`] if the file can't be read, and
    /// [`PickerError::ConfigParse`] if its contents are not a valid config.
    pub fn try_from_json_file(file_path: impl AsRef<Path>) -> miette::Result<Self> {
        let file_path = file_path.as_ref();
        let json = std::fs::read_to_string(file_path).map_err(|source| {
            PickerError::ConfigRead {
                file_path: file_path.display().to_string(),
                source,
            }
        })?;

        tracing::debug!(
            message = "⚙️ Load picker config",
            file_path = %file_path.display()
        );

        Self::try_from_json_str(&json)
    }

    /// # Errors
    ///
    /// Returns an error if the config can't be serialized.
    pub fn try_to_json_string(&self) -> miette::Result<String> {
        serde_json::to_string_pretty(self).into_diagnostic()
    }

    /// The platform version the picker should use, given the one reported by the host.
    #[must_use]
    pub fn effective_platform_version(&self, reported: f64) -> f64 {
        self.platform_version_override.unwrap_or(reported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::try_create_temp_tone_store_dir;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_json_uses_defaults() -> miette::Result<()> {
        let config = PickerConfig::try_from_json_str("{}")?;
        assert_eq!(config, PickerConfig::default());
        assert!(config.dismiss_after_choosing);
        assert_eq!(config.effective_platform_version(15.4), 15.4);
        Ok(())
    }

    #[test]
    fn test_camel_case_keys() -> miette::Result<()> {
        let config = PickerConfig::try_from_json_str(
            r#"{
                "dismissAfterChoosing": false,
                "platformVersionOverride": 14.2,
                "initialCategory": "flags",
                "toneStore": { "bucketName": "tones" }
            }"#,
        )?;
        assert!(!config.dismiss_after_choosing);
        assert!(config.choice_feedback_enabled);
        assert_eq!(config.initial_category, EmojiCategoryType::Flags);
        assert_eq!(config.effective_platform_version(99.0), 14.2);
        assert_eq!(config.tone_store.bucket_name.as_deref(), Some("tones"));
        assert_eq!(config.tone_store.db_folder_path, None);
        Ok(())
    }

    #[test]
    fn test_round_trip_through_file() -> miette::Result<()> {
        let dir = try_create_temp_tone_store_dir()?;
        let file_path = dir.file("picker.json");

        let config = PickerConfig {
            choice_feedback_enabled: false,
            initial_category: EmojiCategoryType::Symbols,
            ..dir.picker_config()
        };
        std::fs::write(&file_path, config.try_to_json_string()?).into_diagnostic()?;

        assert_eq!(PickerConfig::try_from_json_file(&file_path)?, config);
        Ok(())
    }

    #[test]
    fn test_errors() {
        let result = PickerConfig::try_from_json_str(r#"{ "initialCategory": "nope" }"#);
        match result {
            Err(e) => assert_eq!(e.to_string(), "⚙️ Could not parse picker config JSON"),
            Ok(_) => panic!("Expected an error, but got Ok"),
        }

        let result = PickerConfig::try_from_json_file("/this/path/does/not/exist.json");
        match result {
            Err(e) => assert!(e.to_string().contains("Could not read picker config file")),
            Ok(_) => panic!("Expected an error, but got Ok"),
        }
    }
}
