//! Token resolution
//!
//! Resolution layers an extension on top of a default token set:
//!
//! - Each category is merged independently.
//! - Keys only present on one side survive unchanged.
//! - On a key collision the extension value wins.
//! - Keyframes merge by name only; an overriding definition replaces the
//!   default one whole, offsets are never merged.
//!
//! Resolution is a pure, total function. Values are never validated here,
//! including animation -> keyframes references (see [`ResolvedTheme::lint`]).

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::category::TokenCategory;
use crate::error::{ShapeError, Warning};
use crate::extension::ThemeExtension;
use crate::set::{TokenMap, TokenSet};
use crate::value::TokenValue;

/// The merged token set handed to the style generator
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedTheme {
    tokens: TokenSet,
}

impl ResolvedTheme {
    pub fn category(&self, category: TokenCategory) -> &TokenMap {
        self.tokens.category(category)
    }

    pub fn get(&self, category: TokenCategory, key: &str) -> Option<&TokenValue> {
        self.tokens.get(category, key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (TokenCategory, &str, &TokenValue)> {
        self.tokens.entries()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn into_tokens(self) -> TokenSet {
        self.tokens
    }
}

/// Merge `extension` on top of `defaults`.
pub fn resolve(defaults: &TokenSet, extension: &ThemeExtension) -> ResolvedTheme {
    let mut tokens = defaults.clone();
    extend_in_place(&mut tokens, extension);
    ResolvedTheme { tokens }
}

/// Resolve with a replacement layer applied before the extension.
///
/// Every category declared in `replacement` discards the matching default
/// category entirely; `extension` is then merged as in [`resolve`].
pub fn resolve_layers(
    defaults: &TokenSet,
    replacement: &ThemeExtension,
    extension: &ThemeExtension,
) -> ResolvedTheme {
    let mut tokens = defaults.clone();
    for (category, replaced) in replacement.categories() {
        debug!(
            %category,
            dropped = defaults.category(category).len(),
            kept = replaced.len(),
            "replacing default tokens"
        );
        tokens.set_category(category, replaced.clone());
    }
    extend_in_place(&mut tokens, extension);
    ResolvedTheme { tokens }
}

fn extend_in_place(tokens: &mut TokenSet, extension: &ThemeExtension) {
    for (category, overrides) in extension.categories() {
        let target = tokens.category_mut(category);
        for (key, value) in overrides {
            if target.insert(key.clone(), value.clone()).is_some() {
                trace!(%category, key = %key, "extension shadows default token");
            }
        }
    }
}

/// Output of [`resolve_value`]
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub theme: ResolvedTheme,
    pub warnings: Vec<Warning>,
}

/// Read a raw extension node and resolve it against `defaults`.
///
/// Fails fast on a malformed node; unknown categories are returned as warnings.
pub fn resolve_value(defaults: &TokenSet, extension: &Value) -> Result<Resolution, ShapeError> {
    let (extension, warnings) = ThemeExtension::from_value(extension, "extend")?;
    Ok(Resolution {
        theme: resolve(defaults, &extension),
        warnings,
    })
}
