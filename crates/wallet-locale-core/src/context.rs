use std::sync::{Arc, OnceLock};

use crate::active::ActiveTextMap;
use crate::resolver::TextResolver;

/// Handle to the text in effect for a call chain.
///
/// Contexts are passed down explicitly. A provider hands out a new context
/// for the code it governs; the parent handle is left as it was, so callers
/// outside that chain keep seeing the enclosing value.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    active: Arc<ActiveTextMap>,
    provided: bool,
}

fn root_map() -> &'static Arc<ActiveTextMap> {
    static ROOT: OnceLock<Arc<ActiveTextMap>> = OnceLock::new();
    ROOT.get_or_init(|| Arc::new(ActiveTextMap::defaults()))
}

impl LocaleContext {
    /// Context seen when no provider is in scope: the default table.
    pub fn root() -> Self {
        Self {
            active: Arc::clone(root_map()),
            provided: false,
        }
    }

    pub(crate) fn publish(active: Arc<ActiveTextMap>) -> Self {
        Self {
            active,
            provided: true,
        }
    }

    pub fn read(&self) -> &ActiveTextMap {
        &self.active
    }

    /// Shared handle to the published map.
    pub fn snapshot(&self) -> Arc<ActiveTextMap> {
        Arc::clone(&self.active)
    }

    pub fn is_provided(&self) -> bool {
        self.provided
    }

    pub fn resolver(&self) -> TextResolver<'_> {
        TextResolver::new(self)
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextKey;

    #[test]
    fn root_reads_defaults() {
        let ctx = LocaleContext::root();
        assert!(!ctx.is_provided());
        assert_eq!(ctx.read().get(TextKey::WalletModalTitle), "Connect Wallet");
    }

    #[test]
    fn root_contexts_share_one_map() {
        let a = LocaleContext::root();
        let b = LocaleContext::default();
        assert!(Arc::ptr_eq(&a.snapshot(), &b.snapshot()));
    }
}
