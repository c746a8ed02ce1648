//! Development-time checks on override objects.
//!
//! Unknown keys are advisory: they are reported through a [`DiagnosticSink`]
//! and still merged. In [`DiagnosticMode::Production`] the check does not
//! run at all.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::error::LocaleError;
use crate::overrides::TextOverrides;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticMode {
    Development,
    Production,
}

impl DiagnosticMode {
    pub fn checks_keys(self) -> bool {
        matches!(self, DiagnosticMode::Development)
    }
}

impl Default for DiagnosticMode {
    /// Follows the build profile: debug builds check, release builds don't.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            DiagnosticMode::Development
        } else {
            DiagnosticMode::Production
        }
    }
}

impl FromStr for DiagnosticMode {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(DiagnosticMode::Development),
            "production" | "prod" => Ok(DiagnosticMode::Production),
            _ => Err(LocaleError::UnknownMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyDiagnostic {
    pub key: String,
}

impl fmt::Display for UnknownKeyDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' passed to locale override", self.key)
    }
}

/// One diagnostic per unknown key, in key order.
pub fn check_overrides(overrides: &TextOverrides) -> Vec<UnknownKeyDiagnostic> {
    overrides
        .unknown_keys()
        .map(|key| UnknownKeyDiagnostic {
            key: key.to_owned(),
        })
        .collect()
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &UnknownKeyDiagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn report(&self, diagnostic: &UnknownKeyDiagnostic) {
        (**self).report(diagnostic)
    }
}

/// Default sink: a `warn` event with the key as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &UnknownKeyDiagnostic) {
        tracing::warn!(key = %diagnostic.key, "{diagnostic}");
    }
}

/// Keeps every report; used by tooling that wants to list them afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<UnknownKeyDiagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<UnknownKeyDiagnostic> {
        match self.reports.lock() {
            Ok(mut reports) => std::mem::take(&mut *reports),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        match self.reports.lock() {
            Ok(reports) => reports.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &UnknownKeyDiagnostic) {
        match self.reports.lock() {
            Ok(mut reports) => reports.push(diagnostic.clone()),
            Err(poisoned) => poisoned.into_inner().push(diagnostic.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextKey;

    #[test]
    fn message_names_the_key() {
        let diagnostic = UnknownKeyDiagnostic {
            key: "bogusKey".to_owned(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "unknown key 'bogusKey' passed to locale override"
        );
    }

    #[test]
    fn check_skips_known_keys() {
        let overrides = TextOverrides::new()
            .with(TextKey::WalletModalTitle, "Sign In")
            .with_name("zzz", "z")
            .with_name("bogusKey", "x");
        let keys: Vec<_> = check_overrides(&overrides)
            .into_iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(keys, vec!["bogusKey".to_owned(), "zzz".to_owned()]);
    }

    #[test]
    fn mode_parses_loosely() {
        assert_eq!(
            " Production ".parse::<DiagnosticMode>(),
            Ok(DiagnosticMode::Production)
        );
        assert_eq!("dev".parse::<DiagnosticMode>(), Ok(DiagnosticMode::Development));
        assert!("staging".parse::<DiagnosticMode>().is_err());
    }

    #[test]
    fn memory_sink_take_drains() {
        let sink = MemorySink::new();
        sink.report(&UnknownKeyDiagnostic {
            key: "a".to_owned(),
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }
}
