// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Persist remembered skin tones to disk, so a tone chosen in one picker session is
//! still there in the next one (even after the process restarts).
//!
//! - It is a thin wrapper around the [kv] crate. There is one [`kv::Bucket`] that maps a
//!   [`GlyphKey`] (as a [String]) to an encoded [`crate::SkinTone`] (as [`kv::Json`]).
//! - Opening the store is the only fallible step, and it returns fine grained errors
//!   using [miette] and [thiserror] (see [`kv_tone_store_error`]).
//! - Once open, [`KvToneStore`] implements [`ToneStore`], which can't fail. Read and
//!   write errors are logged with [tracing] and then ignored: a failed read means "never
//!   chosen", and a failed write is dropped.

use crate::{GlyphKey, ToneStore, ToneStoreConfig};
use kv::{Config, Json, Store};
use miette::{Context, IntoDiagnostic};
use std::fmt::{Debug, Formatter};

/// Convenience type alias for the [`kv::Bucket`] type that holds the tones.
/// - The key is the [`GlyphKey`] string.
/// - The value is the integer from [`crate::SkinTone::to_stored`], encoded as JSON.
pub type ToneBucket = kv::Bucket<'static, String, Json<i64>>;

mod default_settings {
    #[derive(Debug, strum_macros::EnumString, Hash, PartialEq, Eq, Clone, Copy)]
    pub enum Keys {
        /// [kv] uses this folder to save the key/value store.
        StoreFolderPath,
        /// The [`super::ToneBucket`] name inside the store.
        BucketName,
    }

    pub fn get(key: Keys) -> String {
        match key {
            Keys::StoreFolderPath => "emoji_picker_kv".to_string(),
            Keys::BucketName => "skin_tones".to_string(),
        }
    }
}

pub struct KvToneStore {
    db_folder_path: String,
    bucket_name: String,
    /// Keep the store alive for as long as the bucket is in use.
    _store: Store,
    bucket: ToneBucket,
}

impl Debug for KvToneStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvToneStore")
            .field("db_folder_path", &self.db_folder_path)
            .field("bucket_name", &self.bucket_name)
            .finish_non_exhaustive()
    }
}

impl KvToneStore {
    /// Create the db folder and bucket if they don't exist, otherwise load them from
    /// disk. Paths that are not set in `config` use the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database folder cannot be created
    /// - The store cannot be opened due to I/O errors or permission issues
    /// - The bucket cannot be created in the store
    pub fn try_open(config: &ToneStoreConfig) -> miette::Result<Self> {
        let store = load_or_create_store(config.db_folder_path.as_ref())?;
        let (bucket, bucket_name) =
            load_or_create_bucket_from_store(&store, config.bucket_name.as_ref())?;
        let db_folder_path = config.db_folder_path.clone().unwrap_or_else(|| {
            default_settings::get(default_settings::Keys::StoreFolderPath)
        });

        Ok(Self {
            db_folder_path,
            bucket_name,
            _store: store,
            bucket,
        })
    }

    #[must_use]
    pub fn db_folder_path(&self) -> &str { &self.db_folder_path }

    #[must_use]
    pub fn bucket_name(&self) -> &str { &self.bucket_name }

    /// # Errors
    ///
    /// Returns an error if the value can't be loaded or decoded.
    pub fn try_get(&self, key: &GlyphKey) -> miette::Result<Option<i64>> {
        get_from_bucket(&self.bucket, key)
    }

    /// # Errors
    ///
    /// Returns an error if the value can't be saved, or flushed to disk.
    pub fn try_set(&self, key: &GlyphKey, value: i64) -> miette::Result<()> {
        insert_into_bucket(&self.bucket, key, value)
    }
}

impl ToneStore for KvToneStore {
    fn get(&self, key: &GlyphKey) -> Option<i64> {
        match self.try_get(key) {
            Ok(it) => it,
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "🔼 Could not read skin tone, treating it as never chosen",
                    key = %key,
                    error = ?report
                );
                None
            }
        }
    }

    fn set(&mut self, key: &GlyphKey, value: i64) {
        if let Err(report) = self.try_set(key, value) {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "🔽 Could not save skin tone, dropping it",
                key = %key,
                value = value,
                error = ?report
            );
        }
    }
}

/// # Errors
///
/// Returns an error if:
/// - The database folder cannot be created
/// - The store cannot be opened due to I/O errors or permission issues
/// - The database is corrupted or locked by another process
#[tracing::instrument]
pub fn load_or_create_store(maybe_db_folder_path: Option<&String>) -> miette::Result<Store> {
    let db_folder_path = maybe_db_folder_path.cloned().unwrap_or_else(|| {
        default_settings::get(default_settings::Keys::StoreFolderPath)
    });

    let store = Store::new(Config::new(db_folder_path.clone()))
        .into_diagnostic()
        .wrap_err(KvToneStoreErrorCouldNot::CreateDbFolder {
            db_folder_path: db_folder_path.clone(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📑 load or create a tone store",
        db_folder_path = %db_folder_path
    );

    Ok(store)
}

/// Returns the bucket and the name that was used for it.
///
/// # Errors
///
/// Returns an error if:
/// - The bucket cannot be created in the store
/// - The store is corrupted or inaccessible
#[tracing::instrument(skip(store))]
pub fn load_or_create_bucket_from_store(
    store: &Store,
    maybe_bucket_name: Option<&String>,
) -> miette::Result<(ToneBucket, String)> {
    let bucket_name = maybe_bucket_name
        .cloned()
        .unwrap_or_else(|| default_settings::get(default_settings::Keys::BucketName));

    let bucket: ToneBucket = store
        .bucket(Some(bucket_name.as_str()))
        .into_diagnostic()
        .wrap_err(KvToneStoreErrorCouldNot::CreateBucketFromStore {
            bucket_name: bucket_name.clone(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📦 Load or create tone bucket from store",
        bucket_name = %bucket_name
    );

    Ok((bucket, bucket_name))
}

/// Saves the value and flushes the bucket, so the tone survives a crash right after it
/// was chosen.
///
/// # Errors
///
/// Returns an error if:
/// - The key/value pair cannot be saved to the bucket due to I/O errors
/// - The bucket cannot be flushed to disk
#[tracing::instrument(skip(bucket))]
pub fn insert_into_bucket(
    bucket: &ToneBucket,
    key: &GlyphKey,
    value: i64,
) -> miette::Result<()> {
    bucket
        .set(&key.to_string(), &Json(value))
        .into_diagnostic()
        .wrap_err(KvToneStoreErrorCouldNot::SaveToneToBucket)?;

    bucket
        .flush()
        .into_diagnostic()
        .wrap_err(KvToneStoreErrorCouldNot::FlushBucket)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔽 Save skin tone to bucket",
        key = %key,
        value = value
    );

    Ok(())
}

/// # Errors
///
/// Returns an error if:
/// - The value cannot be loaded due to I/O errors
/// - The value cannot be decoded from JSON
#[tracing::instrument(skip(bucket))]
pub fn get_from_bucket(bucket: &ToneBucket, key: &GlyphKey) -> miette::Result<Option<i64>> {
    let maybe_value: Option<Json<i64>> = bucket
        .get(&key.to_string())
        .into_diagnostic()
        .wrap_err(KvToneStoreErrorCouldNot::LoadToneFromBucket)?;

    let it = maybe_value.map(|Json(value)| value);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔼 Load skin tone from bucket",
        key = %key,
        value = ?it
    );

    Ok(it)
}

pub mod kv_tone_store_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum KvToneStoreErrorCouldNot {
        #[error("📑 Could not create tone store db folder: '{db_folder_path}' on disk")]
        CreateDbFolder { db_folder_path: String },

        #[error("📦 Could not create tone bucket from store: '{bucket_name}'")]
        CreateBucketFromStore { bucket_name: String },

        #[error("🔽 Could not save skin tone to bucket")]
        SaveToneToBucket,

        #[error("🔼 Could not load skin tone from bucket")]
        LoadToneFromBucket,

        #[error("💾 Could not flush tone bucket to disk")]
        FlushBucket,
    }
}
pub use kv_tone_store_error::KvToneStoreErrorCouldNot;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::try_create_temp_tone_store_dir;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn key(code_points: &[u32]) -> GlyphKey { GlyphKey::from(code_points) }

    #[test]
    #[serial]
    fn test_open_set_get() -> miette::Result<()> {
        let dir = try_create_temp_tone_store_dir()?;

        let mut store = KvToneStore::try_open(&dir.tone_store_config(Some("tones")))?;
        assert!(dir.db_folder_path().is_dir());
        assert_eq!(store.bucket_name(), "tones");

        assert_eq!(store.try_get(&key(&[0x1F44D]))?, None);
        assert_eq!(store.get(&key(&[0x1F44D])), None);

        store.set(&key(&[0x1F44D]), 4);
        assert_eq!(store.get(&key(&[0x1F44D])), Some(4));
        assert_eq!(store.get(&key(&[0x1F44E])), None);

        Ok(())
    }

    #[test]
    #[serial]
    fn test_tones_survive_reopen() -> miette::Result<()> {
        let dir = try_create_temp_tone_store_dir()?;
        let config = dir.tone_store_config(Some("tones"));

        {
            let mut store = KvToneStore::try_open(&config)?;
            store.set(&key(&[0x1F469, 0x200D, 0x1F4BB]), 6);
        }

        let store = KvToneStore::try_open(&config)?;
        assert_eq!(store.get(&key(&[0x1F469, 0x200D, 0x1F4BB])), Some(6));

        Ok(())
    }

    #[test]
    #[serial]
    fn test_errors_are_logged_not_raised() -> miette::Result<()> {
        let dir = try_create_temp_tone_store_dir()?;
        let config = dir.tone_store_config(Some("tones"));
        let mut store = KvToneStore::try_open(&config)?;
        store.set(&key(&[0x1F44D]), 2);

        // Induce errors by dropping the bucket out from under the store.
        store
            ._store
            .drop_bucket("tones".to_string())
            .into_diagnostic()?;

        let result = store.try_set(&key(&[0x1F44D]), 3);
        match result {
            Err(e) => assert_eq!(e.to_string(), "🔽 Could not save skin tone to bucket"),
            Ok(()) => panic!("Expected an error, but got Ok"),
        }

        // The infallible API degrades instead.
        store.set(&key(&[0x1F44D]), 3);
        assert_eq!(store.get(&key(&[0x1F44D])), None);

        Ok(())
    }
}
