use std::path::PathBuf;

use thiserror::Error;
use wallet_locale_core::LocaleError;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid overrides json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("overrides must be a json object")]
    NotAnObject,
    #[error("override for '{key}' is not a string")]
    InvalidValue { key: String },
    #[error("overrides are {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: usize },
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Locale(#[from] LocaleError),
}
