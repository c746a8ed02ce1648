use std::path::PathBuf;

use wallet_locale_core::{DiagnosticMode, LocaleProvider, TextOverrides};

use crate::console::ConsoleSink;
use crate::error::AdapterError;
use crate::loader::load_overrides_file;

pub const ENV_OVERRIDES: &str = "WALLET_LOCALE_OVERRIDES";
pub const ENV_DIAGNOSTICS: &str = "WALLET_LOCALE_DIAGNOSTICS";
pub const ENV_MAX_OVERRIDES_BYTES: &str = "WALLET_LOCALE_MAX_OVERRIDES_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletLocaleConfig {
    pub diagnostics: DiagnosticMode,
    pub overrides_path: Option<PathBuf>,
    pub max_overrides_bytes: usize,
}

impl Default for WalletLocaleConfig {
    fn default() -> Self {
        Self {
            diagnostics: DiagnosticMode::default(),
            overrides_path: None,
            max_overrides_bytes: 64 * 1024,
        }
    }
}

impl WalletLocaleConfig {
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset
    /// or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AdapterError> {
        let mut config = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(path) = var(ENV_OVERRIDES) {
            config.overrides_path = Some(PathBuf::from(path));
        }
        if let Some(mode) = var(ENV_DIAGNOSTICS) {
            config.diagnostics = mode.parse()?;
        }
        if let Some(limit) = var(ENV_MAX_OVERRIDES_BYTES) {
            config.max_overrides_bytes = limit.trim().parse().map_err(|e| {
                AdapterError::Config(format!("{ENV_MAX_OVERRIDES_BYTES}={limit}: {e}"))
            })?;
        }
        Ok(config)
    }

    /// Overrides from `overrides_path`, or none if it is unset.
    pub fn load_overrides(&self) -> Result<TextOverrides, AdapterError> {
        match &self.overrides_path {
            Some(path) => load_overrides_file(path, self.max_overrides_bytes),
            None => Ok(TextOverrides::new()),
        }
    }

    pub fn provider(&self) -> Result<LocaleProvider, AdapterError> {
        let overrides = self.load_overrides()?;
        Ok(LocaleProvider::builder()
            .overrides(overrides)
            .mode(self.diagnostics)
            .sink(ConsoleSink)
            .build())
    }
}
