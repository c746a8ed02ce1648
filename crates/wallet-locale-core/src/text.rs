//! Default text table
//!
//! The closed set of text keys and the strings shown when nobody overrides
//! them. Adding a key here is the only way the key set grows.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::LocaleError;

macro_rules! text_keys {
    ($($(#[$meta:meta])* $variant:ident => $name:literal, $default:literal;)+) => {
        /// Symbolic name of one piece of user-facing wallet text.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum TextKey {
            $($(#[$meta])* $variant,)+
        }

        impl TextKey {
            /// Every key, in table order.
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)+];

            /// Wire name used in override objects.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $name,)+
                }
            }

            /// Built-in text, shown when no override applies.
            pub const fn default_text(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $default,)+
                }
            }

            /// Exact, case-sensitive lookup by wire name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(TextKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

text_keys! {
    ConnectWalletButton => "connectWalletButton", "Connect Wallet";
    WalletModalTitle => "walletModalTitle", "Connect Wallet";
    WalletModalDescription => "walletModalDescription", "Connect wallet";
    WalletModalClose => "walletModalClose", "Close modal";
    WalletModalCloseAriaLabel => "walletModalCloseAriaLabel", "Close connect wallet modal";
    WalletModalSignUp => "walletModalSignUp", "Sign up";
    WalletModalContinue => "walletModalContinue", "or continue with an existing wallet";
    WalletModalConnectOnly => "walletModalConnectOnly", "Connect your wallet";
    WalletModalAgreement => "walletModalAgreement", "By connecting a wallet, you agree to our";
    WalletModalAnd => "walletModalAnd", "and";
    WalletModalTerms => "walletModalTerms", "Terms of Service";
    WalletModalPrivacy => "walletModalPrivacy", "Privacy Policy";
    WalletDropdownWallet => "walletDropdownWallet", "Wallet";
    WalletDropdownFund => "walletDropdownFund", "Fund wallet";
    WalletDropdownDisconnect => "walletDropdownDisconnect", "Disconnect";
    WalletDropdownProfile => "walletDropdownProfile", "Profile";
    WalletDropdownClaim => "walletDropdownClaim", "Claim Basename";
    /// Badge shown next to the claim entry.
    WalletDropdownNew => "walletDropdownNew", "NEW";
}

impl TextKey {
    pub const COUNT: usize = TextKey::ALL.len();

    /// Position in [`TextKey::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextKey {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextKey::from_name(s).ok_or_else(|| LocaleError::UnknownKey(s.to_owned()))
    }
}

impl Serialize for TextKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TextKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = TextKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a wallet text key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TextKey, E> {
                TextKey::from_name(v)
                    .ok_or_else(|| E::custom(format!("unknown wallet text key `{v}`")))
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

/// Read-only view over the built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextTable;

impl DefaultTextTable {
    /// Total: every key has a non-empty default.
    pub fn get(key: TextKey) -> &'static str {
        key.default_text()
    }

    pub fn is_valid_key(name: &str) -> bool {
        TextKey::from_name(name).is_some()
    }
}
