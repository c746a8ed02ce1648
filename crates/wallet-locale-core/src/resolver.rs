use crate::context::LocaleContext;
use crate::text::TextKey;

/// Resolves one text slot.
///
/// Precedence: `call_override`, then the context's active map, then the
/// default table when there is no context at all. A `Some("")` override is
/// honored as given.
pub fn resolve(
    context: Option<&LocaleContext>,
    key: TextKey,
    call_override: Option<&str>,
) -> String {
    TextResolver { context }.lookup(key, call_override).to_owned()
}

/// Per-consumer view over a (possibly absent) [`LocaleContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextResolver<'a> {
    context: Option<&'a LocaleContext>,
}

impl<'a> TextResolver<'a> {
    pub fn new(context: &'a LocaleContext) -> Self {
        Self {
            context: Some(context),
        }
    }

    /// Resolver with no context; every lookup falls through to the defaults.
    pub fn detached() -> Self {
        Self { context: None }
    }

    pub fn resolve(&self, key: TextKey, call_override: Option<&str>) -> String {
        self.lookup(key, call_override).to_owned()
    }

    /// Borrowing form of [`TextResolver::resolve`].
    pub fn lookup<'b>(&self, key: TextKey, call_override: Option<&'b str>) -> &'b str
    where
        'a: 'b,
    {
        match call_override {
            Some(text) => text,
            None => self.get(key),
        }
    }

    /// Scope value for `key`, ignoring per-call overrides.
    pub fn get(&self, key: TextKey) -> &'a str {
        match self.context {
            Some(context) => context.read().get(key),
            None => key.default_text(),
        }
    }

    /// Lookup by wire name. Also finds names carried only by the scope's
    /// overrides, which a newer consumer may know about.
    pub fn resolve_name(&self, name: &str) -> Option<String> {
        match self.context {
            Some(context) => context.read().get_name(name).map(str::to_owned),
            None => TextKey::from_name(name).map(|key| key.default_text().to_owned()),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.context.is_none()
    }
}
