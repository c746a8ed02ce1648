use std::fmt::Write;

use wallet_locale_core::{ActiveTextMap, TextKey};

/// One line per key; overridden keys are starred. Names the build does not
/// know are listed separately.
pub fn render_table(active: &ActiveTextMap) -> String {
    let width = TextKey::ALL
        .iter()
        .map(|key| key.as_str().len())
        .chain(active.extras().keys().map(String::len))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for key in TextKey::ALL {
        let marker = if active.is_overridden(*key) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:<width$}  {}", key.as_str(), active.get(*key));
    }
    if !active.extras().is_empty() {
        out.push_str("\nunknown keys:\n");
        for (name, text) in active.extras() {
            let _ = writeln!(out, "? {name:<width$}  {text}");
        }
    }
    out
}
