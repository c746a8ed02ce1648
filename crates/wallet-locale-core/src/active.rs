use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::text::TextKey;

/// Merged text in effect for one scope.
///
/// One slot per [`TextKey`], always filled, so lookups by key cannot miss.
/// Overrides for names this build does not know are carried in `extras`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTextMap {
    texts: [Cow<'static, str>; TextKey::COUNT],
    extras: BTreeMap<String, String>,
}

impl ActiveTextMap {
    /// The default table with nothing applied.
    pub fn defaults() -> Self {
        Self {
            texts: std::array::from_fn(|i| Cow::Borrowed(TextKey::ALL[i].default_text())),
            extras: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: TextKey) -> &str {
        &self.texts[key.index()]
    }

    /// Lookup by wire name, including names carried in `extras`.
    pub fn get_name(&self, name: &str) -> Option<&str> {
        match TextKey::from_name(name) {
            Some(key) => Some(self.get(key)),
            None => self.extras.get(name).map(String::as_str),
        }
    }

    pub fn is_overridden(&self, key: TextKey) -> bool {
        matches!(self.texts[key.index()], Cow::Owned(_))
    }

    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    /// Known keys in table order, then extras in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        TextKey::ALL
            .iter()
            .map(|key| (key.as_str(), self.get(*key)))
            .chain(self.extras.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub(crate) fn apply(&mut self, name: &str, text: &str) {
        match TextKey::from_name(name) {
            Some(key) => self.texts[key.index()] = Cow::Owned(text.to_owned()),
            None => {
                self.extras.insert(name.to_owned(), text.to_owned());
            }
        }
    }
}

impl Default for ActiveTextMap {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Serialize for ActiveTextMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TextKey::COUNT + self.extras.len()))?;
        for (name, text) in self.iter() {
            map.serialize_entry(name, text)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_every_slot() {
        let map = ActiveTextMap::defaults();
        for key in TextKey::ALL {
            assert_eq!(map.get(*key), key.default_text());
            assert!(!map.is_overridden(*key));
        }
        assert!(map.extras().is_empty());
    }

    #[test]
    fn apply_routes_unknown_names_to_extras() {
        let mut map = ActiveTextMap::defaults();
        map.apply("walletModalAnd", "&");
        map.apply("walletModalFooter", "Powered by Base");
        assert_eq!(map.get(TextKey::WalletModalAnd), "&");
        assert!(map.is_overridden(TextKey::WalletModalAnd));
        assert_eq!(map.get_name("walletModalFooter"), Some("Powered by Base"));
        assert_eq!(map.get_name("missing"), None);
    }

    #[test]
    fn serializes_known_keys_before_extras() {
        let mut map = ActiveTextMap::defaults();
        map.apply("aaa", "first alphabetically");
        let json = serde_json::to_string(&map).expect("serialize map");
        let title = json.find("connectWalletButton").expect("known key present");
        let extra = json.find("\"aaa\"").expect("extra present");
        assert!(title < extra);
    }
}
