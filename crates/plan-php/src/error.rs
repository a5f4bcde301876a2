//! Error types for plan-php

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plan-php.
///
/// The manifest variants never escape the inference operations, which treat
/// all of them as "unavailable" and fall back to defaults. They are kept
/// distinct so the fallback can be logged with its cause.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source error: {0}")]
    Fs(#[from] plan_fs::Error),

    #[error("composer.json not found")]
    ManifestNotFound,

    #[error("Failed to parse composer.json: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("Unknown PHP framework: {name}")]
    UnknownFramework { name: String },
}
