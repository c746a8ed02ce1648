#![cfg(not(target_arch = "wasm32"))]

use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wallet_locale_adapters::ConsoleSink;
use wallet_locale_core::{DiagnosticMode, LocaleProvider, TextOverrides};

/// Keeps the `key` field of every `warn` event.
struct WarnedKeys {
    keys: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for WarnedKeys
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        struct Key(Option<String>);
        impl tracing::field::Visit for Key {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "key" {
                    self.0 = Some(format!("{value:?}").trim_matches('"').to_owned());
                }
            }
        }
        let mut key = Key(None);
        event.record(&mut key);
        if let Some(key) = key.0 {
            self.keys.lock().expect("capture lock").push(key);
        }
    }
}

#[test]
fn console_sink_warns_through_tracing_off_wasm() {
    let keys = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(WarnedKeys {
        keys: Arc::clone(&keys),
    });
    tracing::subscriber::with_default(subscriber, || {
        let overrides = TextOverrides::new()
            .with_name("bogusKey", "x")
            .with_name("anotherKey", "y");
        let _provider = LocaleProvider::builder()
            .overrides(overrides)
            .mode(DiagnosticMode::Development)
            .sink(ConsoleSink)
            .build();
    });
    assert_eq!(
        *keys.lock().expect("capture lock"),
        vec!["anotherKey".to_owned(), "bogusKey".to_owned()]
    );
}
