#![allow(dead_code)]

use std::sync::Arc;

use wallet_locale_core::{DiagnosticMode, LocaleProvider, MemorySink, TextKey, TextOverrides};

pub fn provider_with_sink(
    overrides: TextOverrides,
    mode: DiagnosticMode,
) -> (LocaleProvider, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let provider = LocaleProvider::builder()
        .overrides(overrides)
        .mode(mode)
        .sink(Arc::clone(&sink))
        .build();
    (provider, sink)
}

pub fn sign_in_overrides() -> TextOverrides {
    TextOverrides::new().with(TextKey::WalletModalTitle, "Sign In")
}

/// Overrides touching every key except `skip`.
pub fn overrides_except(skip: TextKey) -> TextOverrides {
    TextKey::ALL
        .iter()
        .filter(|key| **key != skip)
        .map(|key| (key.as_str(), format!("custom {key}")))
        .collect()
}
