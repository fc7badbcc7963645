// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPreference, PickerError, TracingConfig};
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed. This is great
/// for apps.
///
/// If `options` has a level filter of [`LevelFilter::OFF`] then nothing is installed,
/// and the `tracing` macros used by this crate are no-ops.
///
/// # Errors
///
/// Returns [`PickerError::LoggingInit`] if a global subscriber was already set (by this
/// function or anything else in the process).
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(create_layers(it))
        .try_init()
        .map_err(|error| PickerError::LoggingInit {
            reason: error.to_string(),
        })?;

    Ok(())
}

/// Thread local subscriber, which you can assign to different threads. This is great
/// for tests. Drop the returned guard to restore the previous subscriber. Returns
/// [None] if the level filter is [`LevelFilter::OFF`].
#[must_use]
pub fn initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> Option<dispatcher::DefaultGuard> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return None;
    }

    Some(tracing_subscriber::registry().with(create_layers(it)).set_default())
}

/// Returns the layers. This does not initialize the tracing system.
#[must_use]
pub fn create_layers(
    tracing_config: TracingConfig,
) -> Vec<Box<DynLayer<tracing_subscriber::Registry>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration.
    return_it.push(Box::new(tracing_config.get_level_filter()));
    return_it.push(create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.writer,
    ));

    return_it
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_pref: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_thread_names(false);

    match display_pref {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryToneStore, PickerConfig, PickerSession};
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn test_create_layers() {
        let layers = create_layers(TracingConfig::new_display(DisplayPreference::Stdout));
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_off_installs_nothing() {
        assert!(initialize_logging_thread_local(TracingConfig::default()).is_none());
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }

    #[test]
    fn test_thread_local_subscriber_sees_picker_logs() {
        let guard = initialize_logging_thread_local(LevelFilter::TRACE);
        assert!(guard.is_some());

        // Exercise the instrumented code paths with a live subscriber.
        let session =
            PickerSession::new(14.2, InMemoryToneStore::default(), PickerConfig::default());
        assert_eq!(session.catalog().emoji_version().to_string(), "13.0");

        drop(guard);
    }

    #[test]
    #[serial]
    fn test_global_init_only_once() {
        let config = TracingConfig {
            level_filter: LevelFilter::WARN,
            writer: DisplayPreference::Stderr,
        };

        // Another test binary may have installed one already, so only the second call
        // is guaranteed to fail.
        try_initialize_logging_global(config).ok();
        match try_initialize_logging_global(config) {
            Err(e) => assert!(
                e.to_string()
                    .starts_with("📝 Could not initialize global tracing subscriber")
            ),
            Ok(()) => panic!("Expected an error, but got Ok"),
        }
    }
}
