use wallet_locale_core::{DiagnosticSink, UnknownKeyDiagnostic};

/// Reports unknown keys to the browser console on wasm, to `tracing` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, diagnostic: &UnknownKeyDiagnostic) {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&diagnostic.to_string().into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!(key = %diagnostic.key, "{diagnostic}");
        }
    }
}
