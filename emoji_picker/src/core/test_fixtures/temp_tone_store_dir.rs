// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::generate_friendly_random_id;
use crate::{PickerConfig, ToneStoreConfig};
use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};

/// Name of the [`crate::KvToneStore`] folder inside the temp dir.
pub const DB_FOLDER_NAME: &str = "db_folder";

/// A scratch folder under [`std::env::temp_dir`] for one test, holding a
/// [`crate::KvToneStore`] and any other files the test writes. The folder and everything
/// in it is deleted when this is dropped, so keep it alive for as long as a store opened
/// with [`Self::tone_store_config`] is in use.
#[derive(Debug)]
pub struct TempToneStoreDir {
    root: PathBuf,
}

/// # Errors
///
/// Returns an error if the folder can't be created, or already exists.
pub fn try_create_temp_tone_store_dir() -> miette::Result<TempToneStoreDir> {
    let name = format!(
        "emoji_picker_{}_{}",
        std::process::id(),
        generate_friendly_random_id()
    );
    let root = std::env::temp_dir().join(name);
    std::fs::create_dir(&root).into_diagnostic()?;
    Ok(TempToneStoreDir { root })
}

impl TempToneStoreDir {
    #[must_use]
    pub fn root(&self) -> &Path { &self.root }

    /// Path of a file in this folder, eg: a config file.
    #[must_use]
    pub fn file(&self, file_name: &str) -> PathBuf { self.root.join(file_name) }

    #[must_use]
    pub fn db_folder_path(&self) -> PathBuf { self.root.join(DB_FOLDER_NAME) }

    /// Points the store at [`Self::db_folder_path`]. [None] uses the default bucket.
    #[must_use]
    pub fn tone_store_config(&self, maybe_bucket_name: Option<&str>) -> ToneStoreConfig {
        ToneStoreConfig {
            db_folder_path: Some(self.db_folder_path().display().to_string()),
            bucket_name: maybe_bucket_name.map(ToString::to_string),
        }
    }

    /// Default picker settings, with the tone store in this folder.
    #[must_use]
    pub fn picker_config(&self) -> PickerConfig {
        PickerConfig {
            tone_store: self.tone_store_config(None),
            ..Default::default()
        }
    }
}

impl Drop for TempToneStoreDir {
    fn drop(&mut self) {
        // Best effort, a leftover folder in the temp dir is harmless.
        std::fs::remove_dir_all(&self.root).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_folder_is_deleted_on_drop() -> miette::Result<()> {
        let dir = try_create_temp_tone_store_dir()?;
        assert!(dir.root().is_dir());

        let copy_of_path = dir.root().to_path_buf();
        drop(dir);
        assert!(!copy_of_path.exists());

        Ok(())
    }

    #[test]
    fn test_configs_point_into_the_folder() -> miette::Result<()> {
        let dir = try_create_temp_tone_store_dir()?;

        let config = dir.tone_store_config(Some("tones"));
        assert_eq!(config.bucket_name.as_deref(), Some("tones"));
        let db_folder_path = PathBuf::from(config.db_folder_path.unwrap());
        assert!(db_folder_path.starts_with(dir.root()));
        assert!(!db_folder_path.exists());

        let picker_config = dir.picker_config();
        assert_eq!(picker_config.tone_store.bucket_name, None);
        assert!(picker_config.dismiss_after_choosing);
        assert!(dir.file("picker.json").starts_with(dir.root()));

        Ok(())
    }

    #[test]
    fn test_each_test_gets_its_own_folder() -> miette::Result<()> {
        let lhs = try_create_temp_tone_store_dir()?;
        let rhs = try_create_temp_tone_store_dir()?;
        assert!(lhs.root() != rhs.root());
        assert!(lhs.db_folder_path() != rhs.db_folder_path());
        Ok(())
    }
}
