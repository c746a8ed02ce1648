use serde::{Deserialize, Serialize};

use crate::resolver::TextResolver;
use crate::text::TextKey;

pub const BASENAME_PROFILE_URL: &str = "https://www.base.org/name/";
pub const BASENAME_CLAIM_URL: &str = "https://www.base.org/names";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropdownBasenameProps {
    pub profile_text: Option<String>,
    pub claim_text: Option<String>,
    pub new_badge_text: Option<String>,
}

/// Basename entry of the wallet dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownBasenameView {
    pub title: String,
    pub href: String,
    pub badge: Option<String>,
}

impl DropdownBasenameView {
    /// `basename` is the result of the caller's name lookup; an empty name
    /// counts as none.
    pub fn build(
        resolver: &TextResolver<'_>,
        props: &DropdownBasenameProps,
        basename: Option<&str>,
    ) -> Self {
        match basename.filter(|name| !name.is_empty()) {
            Some(name) => Self {
                title: resolver
                    .resolve(TextKey::WalletDropdownProfile, props.profile_text.as_deref()),
                href: format!("{BASENAME_PROFILE_URL}{name}"),
                badge: None,
            },
            None => Self {
                title: resolver
                    .resolve(TextKey::WalletDropdownClaim, props.claim_text.as_deref()),
                href: BASENAME_CLAIM_URL.to_owned(),
                badge: Some(
                    resolver
                        .resolve(TextKey::WalletDropdownNew, props.new_badge_text.as_deref()),
                ),
            },
        }
    }
}

/// Fixed dropdown entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownText {
    pub wallet: String,
    pub fund: String,
    pub disconnect: String,
}

impl DropdownText {
    pub fn resolve(resolver: &TextResolver<'_>) -> Self {
        Self {
            wallet: resolver.resolve(TextKey::WalletDropdownWallet, None),
            fund: resolver.resolve(TextKey::WalletDropdownFund, None),
            disconnect: resolver.resolve(TextKey::WalletDropdownDisconnect, None),
        }
    }
}

pub fn connect_button_text(resolver: &TextResolver<'_>, call_override: Option<&str>) -> String {
    resolver.resolve(TextKey::ConnectWalletButton, call_override)
}
