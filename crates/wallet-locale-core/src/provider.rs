use std::fmt;
use std::sync::Arc;

use crate::active::ActiveTextMap;
use crate::context::LocaleContext;
use crate::diagnostics::{check_overrides, DiagnosticMode, DiagnosticSink, TracingSink};
use crate::overrides::TextOverrides;

/// Defaults with `overrides` applied on top.
///
/// Pure: the same overrides always produce an equal map. Names the default
/// table does not know are kept in the map's extras.
pub fn merge(overrides: &TextOverrides) -> ActiveTextMap {
    let mut active = ActiveTextMap::defaults();
    for (name, text) in overrides.iter() {
        active.apply(name, text);
    }
    active
}

/// Owns the overrides for one scope and publishes the merged text.
pub struct LocaleProvider {
    overrides: TextOverrides,
    active: Arc<ActiveTextMap>,
    mode: DiagnosticMode,
    sink: Box<dyn DiagnosticSink>,
    revision: u64,
}

impl LocaleProvider {
    pub fn new(overrides: TextOverrides) -> Self {
        Self::builder().overrides(overrides).build()
    }

    pub fn builder() -> LocaleProviderBuilder {
        LocaleProviderBuilder::default()
    }

    /// Replaces the overrides. The merge (and the key check) only runs when
    /// the content differs from the current overrides; returns whether it ran.
    pub fn set_overrides(&mut self, overrides: TextOverrides) -> bool {
        if overrides == self.overrides {
            return false;
        }
        self.validate(&overrides);
        self.active = Arc::new(merge(&overrides));
        self.overrides = overrides;
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            overrides = self.overrides.len(),
            "recomputed active text map"
        );
        true
    }

    /// Context for the code this provider governs.
    pub fn scope(&self) -> LocaleContext {
        LocaleContext::publish(Arc::clone(&self.active))
    }

    pub fn active(&self) -> Arc<ActiveTextMap> {
        Arc::clone(&self.active)
    }

    pub fn overrides(&self) -> &TextOverrides {
        &self.overrides
    }

    pub fn mode(&self) -> DiagnosticMode {
        self.mode
    }

    /// Number of merges performed, starting at 1 for the initial one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn validate(&self, overrides: &TextOverrides) {
        if !self.mode.checks_keys() {
            return;
        }
        for diagnostic in check_overrides(overrides) {
            self.sink.report(&diagnostic);
        }
    }
}

impl Default for LocaleProvider {
    fn default() -> Self {
        Self::new(TextOverrides::new())
    }
}

impl fmt::Debug for LocaleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleProvider")
            .field("overrides", &self.overrides)
            .field("mode", &self.mode)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct LocaleProviderBuilder {
    overrides: TextOverrides,
    mode: DiagnosticMode,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl LocaleProviderBuilder {
    pub fn overrides(mut self, overrides: TextOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn mode(mut self, mode: DiagnosticMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> LocaleProvider {
        let mut provider = LocaleProvider {
            overrides: TextOverrides::new(),
            active: Arc::new(ActiveTextMap::defaults()),
            mode: self.mode,
            sink: self.sink.unwrap_or_else(|| Box::new(TracingSink)),
            revision: 0,
        };
        provider.validate(&self.overrides);
        provider.active = Arc::new(merge(&self.overrides));
        provider.overrides = self.overrides;
        provider.revision = 1;
        provider
    }
}

impl fmt::Debug for LocaleProviderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleProviderBuilder")
            .field("overrides", &self.overrides)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
