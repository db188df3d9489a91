//! Token maps and complete token sets

use crate::category::TokenCategory;
use crate::value::TokenValue;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;

static EMPTY: TokenMap = TokenMap::new();

/// A `(category, key, value)` triple
#[derive(Clone, Debug, PartialEq)]
pub struct TokenEntry {
    pub category: TokenCategory,
    pub key: String,
    pub value: TokenValue,
}

impl TokenEntry {
    pub fn new(
        category: TokenCategory,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        Self {
            category,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Key -> value mapping for one category.
///
/// Keys are unique. Iteration is sorted by key, which keeps output stable
/// without giving order any meaning.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenMap {
    entries: BTreeMap<String, TokenValue>,
}

impl TokenMap {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value, returning the one it shadows
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Option<TokenValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, TokenValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<TokenValue>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = (&'a String, &'a TokenValue);
    type IntoIter = btree_map::Iter<'a, String, TokenValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A token set covering every [`TokenCategory`].
///
/// Categories that were never populated read as empty maps, so a `TokenSet`
/// always has an entry for each category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenSet {
    categories: BTreeMap<TokenCategory, TokenMap>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: TokenCategory) -> &TokenMap {
        self.categories.get(&category).unwrap_or(&EMPTY)
    }

    pub fn category_mut(&mut self, category: TokenCategory) -> &mut TokenMap {
        self.categories.entry(category).or_default()
    }

    /// Replace a whole category
    pub fn set_category(&mut self, category: TokenCategory, tokens: TokenMap) {
        self.categories.insert(category, tokens);
    }

    pub fn get(&self, category: TokenCategory, key: &str) -> Option<&TokenValue> {
        self.category(category).get(key)
    }

    pub fn insert(&mut self, entry: TokenEntry) -> Option<TokenValue> {
        self.category_mut(entry.category).insert(entry.key, entry.value)
    }

    /// Builder-style insert
    pub fn with(
        mut self,
        category: TokenCategory,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.category_mut(category).insert(key, value);
        self
    }

    /// All entries, grouped by category in [`TokenCategory::ALL`] order
    pub fn entries(&self) -> impl Iterator<Item = (TokenCategory, &str, &TokenValue)> {
        TokenCategory::ALL.into_iter().flat_map(move |category| {
            self.category(category)
                .iter()
                .map(move |(key, value)| (category, key.as_str(), value))
        })
    }

    /// Total number of tokens across all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(TokenMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<TokenEntry> for TokenSet {
    fn from_iter<T: IntoIterator<Item = TokenEntry>>(iter: T) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TokenCategory::ALL.len()))?;
        for category in TokenCategory::ALL {
            map.serialize_entry(category.config_key(), self.category(category))?;
        }
        map.end()
    }
}
