// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for the ambient parts of this crate (config loading and logging setup). The
//! catalog and skin tone operations themselves never fail, they degrade instead:
//! - Invalid code points truncate the rendered string.
//! - Out of range platform versions clamp to the oldest or newest catalog.
//! - Tone store failures are logged and the tone reads as "never chosen".

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum PickerError {
    #[error("⚙️ Could not parse picker config JSON")]
    #[diagnostic(
        code(r3bl_emoji_picker::config_parse),
        help("Keys are camelCase, eg: `dismissAfterChoosing`, `toneStore`")
    )]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("📄 Could not read picker config file: '{file_path}'")]
    #[diagnostic(code(r3bl_emoji_picker::config_read))]
    ConfigRead {
        file_path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("📝 Could not initialize global tracing subscriber: {reason}")]
    #[diagnostic(
        code(r3bl_emoji_picker::logging_init),
        help("A global subscriber can only be set once per process")
    )]
    LoggingInit { reason: String },
}
