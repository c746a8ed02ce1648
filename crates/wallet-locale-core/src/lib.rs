//! Text table, override merging and scoped text resolution for wallet widgets.
//!
//! Defaults live in [`TextKey`]; a [`LocaleProvider`] merges caller overrides
//! on top and hands out [`LocaleContext`] handles that consumers pass down to
//! a [`TextResolver`].

pub mod active;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod overrides;
pub mod provider;
pub mod resolver;
pub mod text;
pub mod widgets;

pub use active::ActiveTextMap;
pub use context::LocaleContext;
pub use diagnostics::{
    check_overrides, DiagnosticMode, DiagnosticSink, MemorySink, TracingSink,
    UnknownKeyDiagnostic,
};
pub use error::LocaleError;
pub use overrides::TextOverrides;
pub use provider::{merge, LocaleProvider, LocaleProviderBuilder};
pub use resolver::{resolve, TextResolver};
pub use text::{DefaultTextTable, TextKey};
pub use widgets::{
    connect_button_text, DropdownBasenameProps, DropdownBasenameView, DropdownText, LegalLink,
    LegalNotice, SupportedWallets, WalletModalOptions, WalletModalProps, WalletModalText,
    WalletModalView, WalletOption,
};
