use serde::{Deserialize, Serialize};

use crate::resolver::TextResolver;
use crate::text::TextKey;

/// Per-instance text overrides accepted by the connect modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletModalProps {
    pub title_text: Option<String>,
    pub sign_up_text: Option<String>,
    pub terms_text: Option<String>,
    pub privacy_text: Option<String>,
    pub continue_text: Option<String>,
    pub connect_wallet_only_text: Option<String>,
    pub close_button_aria_label: Option<String>,
}

/// Opt-in wallets. Coinbase Wallet, MetaMask and Phantom are always listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedWallets {
    pub rabby: bool,
    pub trust: bool,
    pub frame: bool,
}

/// App-level modal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletModalOptions {
    pub sign_up_enabled: bool,
    pub terms_url: Option<String>,
    pub privacy_url: Option<String>,
    pub app_name: Option<String>,
    pub supported_wallets: SupportedWallets,
}

impl Default for WalletModalOptions {
    fn default() -> Self {
        Self {
            sign_up_enabled: true,
            terms_url: None,
            privacy_url: None,
            app_name: None,
            supported_wallets: SupportedWallets::default(),
        }
    }
}

/// Every text slot of the modal, resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletModalText {
    pub title: String,
    pub description: String,
    pub close_label: String,
    pub close_aria_label: String,
    pub sign_up: String,
    pub continue_existing: String,
    pub connect_only: String,
    pub agreement: String,
    pub terms: String,
    pub and: String,
    pub privacy: String,
}

impl WalletModalText {
    pub fn resolve(resolver: &TextResolver<'_>, props: &WalletModalProps) -> Self {
        let slot = |key: TextKey, call_override: &Option<String>| {
            resolver.resolve(key, call_override.as_deref())
        };
        Self {
            title: slot(TextKey::WalletModalTitle, &props.title_text),
            description: resolver.resolve(TextKey::WalletModalDescription, None),
            close_label: resolver.resolve(TextKey::WalletModalClose, None),
            close_aria_label: slot(
                TextKey::WalletModalCloseAriaLabel,
                &props.close_button_aria_label,
            ),
            sign_up: slot(TextKey::WalletModalSignUp, &props.sign_up_text),
            continue_existing: slot(TextKey::WalletModalContinue, &props.continue_text),
            connect_only: slot(
                TextKey::WalletModalConnectOnly,
                &props.connect_wallet_only_text,
            ),
            agreement: resolver.resolve(TextKey::WalletModalAgreement, None),
            terms: slot(TextKey::WalletModalTerms, &props.terms_text),
            and: resolver.resolve(TextKey::WalletModalAnd, None),
            privacy: slot(TextKey::WalletModalPrivacy, &props.privacy_text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletOption {
    Coinbase,
    MetaMask,
    Phantom,
    Rabby,
    Trust,
    Frame,
}

impl WalletOption {
    /// Display order.
    pub const ALL: [WalletOption; 6] = [
        WalletOption::Coinbase,
        WalletOption::MetaMask,
        WalletOption::Phantom,
        WalletOption::Rabby,
        WalletOption::Trust,
        WalletOption::Frame,
    ];

    pub fn id(self) -> &'static str {
        match self {
            WalletOption::Coinbase => "coinbase",
            WalletOption::MetaMask => "metamask",
            WalletOption::Phantom => "phantom",
            WalletOption::Rabby => "rabby",
            WalletOption::Trust => "trust",
            WalletOption::Frame => "frame",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WalletOption::Coinbase => "Coinbase Wallet",
            WalletOption::MetaMask => "MetaMask",
            WalletOption::Phantom => "Phantom",
            WalletOption::Rabby => "Rabby",
            WalletOption::Trust => "Trust Wallet",
            WalletOption::Frame => "Frame",
        }
    }

    pub fn is_enabled(self, supported: &SupportedWallets) -> bool {
        match self {
            WalletOption::Coinbase | WalletOption::MetaMask | WalletOption::Phantom => true,
            WalletOption::Rabby => supported.rabby,
            WalletOption::Trust => supported.trust,
            WalletOption::Frame => supported.frame,
        }
    }

    pub fn enabled(supported: &SupportedWallets) -> Vec<WalletOption> {
        Self::ALL
            .into_iter()
            .filter(|wallet| wallet.is_enabled(supported))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalLink {
    pub label: String,
    pub url: String,
}

/// Footer sentence pieces; absent parts are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegalNotice {
    pub agreement: Option<String>,
    pub terms: Option<LegalLink>,
    pub conjunction: Option<String>,
    pub privacy: Option<LegalLink>,
}

/// What the modal shows for a given configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletModalView {
    pub title: String,
    pub description: String,
    pub close_aria_label: String,
    pub app_name: Option<String>,
    pub sign_up_button: Option<String>,
    pub divider: String,
    pub wallets: Vec<WalletOption>,
    pub legal: LegalNotice,
}

impl WalletModalView {
    pub fn build(
        resolver: &TextResolver<'_>,
        props: &WalletModalProps,
        options: &WalletModalOptions,
    ) -> Self {
        let text = WalletModalText::resolve(resolver, props);
        let sign_up_enabled = options.sign_up_enabled;
        // Empty strings count as unset.
        let terms_url = non_empty(&options.terms_url);
        let privacy_url = non_empty(&options.privacy_url);

        let legal = LegalNotice {
            agreement: sign_up_enabled.then(|| text.agreement.clone()),
            terms: terms_url.map(|url| LegalLink {
                label: text.terms.clone(),
                url: url.to_owned(),
            }),
            conjunction: (terms_url.is_some() && privacy_url.is_some()).then(|| text.and.clone()),
            privacy: privacy_url.map(|url| LegalLink {
                label: text.privacy.clone(),
                url: url.to_owned(),
            }),
        };

        Self {
            divider: if sign_up_enabled {
                text.continue_existing
            } else {
                text.connect_only
            },
            sign_up_button: sign_up_enabled.then_some(text.sign_up),
            title: text.title,
            description: text.description,
            close_aria_label: text.close_aria_label,
            app_name: non_empty(&options.app_name).map(str::to_owned),
            wallets: WalletOption::enabled(&options.supported_wallets),
            legal,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_sign_up_only() {
        let options = WalletModalOptions::default();
        assert!(options.sign_up_enabled);
        assert_eq!(options.supported_wallets, SupportedWallets::default());
    }

    #[test]
    fn options_deserialize_with_missing_fields() {
        let options: WalletModalOptions =
            serde_json::from_str(r#"{"supportedWallets":{"frame":true}}"#)
                .expect("parse options");
        assert!(options.sign_up_enabled);
        assert!(options.supported_wallets.frame);
        assert!(!options.supported_wallets.rabby);
    }

    #[test]
    fn always_on_wallets_ignore_support_flags() {
        let wallets = WalletOption::enabled(&SupportedWallets::default());
        assert_eq!(
            wallets,
            vec![
                WalletOption::Coinbase,
                WalletOption::MetaMask,
                WalletOption::Phantom
            ]
        );
    }
}
