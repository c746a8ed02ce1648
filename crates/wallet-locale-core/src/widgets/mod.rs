//! Text models for the wallet widgets.
//!
//! Each model resolves the slots a widget renders and applies the few
//! rules that decide which slot is shown. Drawing them is up to the host.

mod dropdown;
mod modal;

pub use dropdown::{
    connect_button_text, DropdownBasenameProps, DropdownBasenameView, DropdownText,
    BASENAME_CLAIM_URL, BASENAME_PROFILE_URL,
};
pub use modal::{
    LegalLink, LegalNotice, SupportedWallets, WalletModalOptions, WalletModalProps,
    WalletModalText, WalletModalView, WalletOption,
};
