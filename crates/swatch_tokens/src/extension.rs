//! Theme extensions
//!
//! A [`ThemeExtension`] is a partial token set: any category may be absent.
//! Extensions are built once, either programmatically through
//! [`ThemeExtension::builder`] or from a decoded document node with
//! [`ThemeExtension::from_value`], and are read-only afterwards.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use crate::category::TokenCategory;
use crate::error::{ShapeError, Warning};
use crate::set::{TokenEntry, TokenMap};
use crate::value::{KeyframeOffset, KeyframeStop, Keyframes, TokenValue};

/// Nested color key that names the group itself
const DEFAULT_KEY: &str = "DEFAULT";

/// Partial, immutable mapping from category to tokens
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeExtension {
    categories: BTreeMap<TokenCategory, TokenMap>,
}

impl ThemeExtension {
    /// An extension that declares nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ThemeExtensionBuilder {
        ThemeExtensionBuilder::default()
    }

    /// Tokens declared for `category`, or `None` if the category was omitted.
    pub fn category(&self, category: TokenCategory) -> Option<&TokenMap> {
        self.categories.get(&category)
    }

    /// Declared categories and their tokens, in category order
    pub fn categories(&self) -> impl Iterator<Item = (TokenCategory, &TokenMap)> {
        self.categories.iter().map(|(c, m)| (*c, m))
    }

    pub fn get(&self, category: TokenCategory, key: &str) -> Option<&TokenValue> {
        self.category(category)?.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(TokenMap::is_empty)
    }

    /// Read an extension from a decoded document node.
    ///
    /// `path` is the node's location in the document (e.g. `theme.extend`)
    /// and prefixes every error and warning path. Unknown categories are
    /// skipped and reported as [`Warning::UnknownCategory`]; any structural
    /// mismatch fails with [`ShapeError::InvalidShape`].
    pub fn from_value(value: &Value, path: &str) -> Result<(Self, Vec<Warning>), ShapeError> {
        let object = expect_object(value, path, None, "a mapping of token categories")?;

        let mut categories = BTreeMap::new();
        let mut warnings = Vec::new();

        for (name, node) in object {
            let node_path = join(path, name);
            let Some(category) = TokenCategory::from_config_key(name) else {
                warn!(category = %name, path = %node_path, "ignoring unknown token category");
                warnings.push(Warning::UnknownCategory {
                    name: name.clone(),
                    path: node_path,
                });
                continue;
            };
            categories.insert(category, parse_category(category, node, &node_path)?);
        }

        Ok((Self { categories }, warnings))
    }
}

impl FromIterator<TokenEntry> for ThemeExtension {
    fn from_iter<T: IntoIterator<Item = TokenEntry>>(iter: T) -> Self {
        let mut builder = Self::builder();
        for entry in iter {
            builder = builder.entry(entry);
        }
        builder.build()
    }
}

/// Programmatic construction of a [`ThemeExtension`]
#[derive(Debug, Default)]
pub struct ThemeExtensionBuilder {
    categories: BTreeMap<TokenCategory, TokenMap>,
}

impl ThemeExtensionBuilder {
    pub fn token(
        mut self,
        category: TokenCategory,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.categories.entry(category).or_default().insert(key, value);
        self
    }

    pub fn entry(self, entry: TokenEntry) -> Self {
        self.token(entry.category, entry.key, entry.value)
    }

    /// Declare a category with no tokens. An empty category resolves the
    /// same as an omitted one.
    pub fn category(mut self, category: TokenCategory) -> Self {
        self.categories.entry(category).or_default();
        self
    }

    pub fn build(self) -> ThemeExtension {
        ThemeExtension {
            categories: self.categories,
        }
    }
}

// ============================================================================
// Document node parsing
// ============================================================================

fn parse_category(
    category: TokenCategory,
    node: &Value,
    path: &str,
) -> Result<TokenMap, ShapeError> {
    let object = expect_object(node, path, Some(category), "a mapping of token keys")?;
    let mut tokens = TokenMap::new();

    for (key, value) in object {
        let key_path = join(path, key);
        match category {
            TokenCategory::Color => flatten_colors(&mut tokens, key, value, &key_path)?,
            TokenCategory::FontFamily => {
                tokens.insert(key.clone(), parse_font_stack(value, &key_path)?);
            }
            TokenCategory::Keyframes => {
                tokens.insert(key.clone(), parse_keyframes(value, &key_path)?);
            }
            _ => {
                let css = scalar(value, &key_path, Some(category))?;
                tokens.insert(key.clone(), css);
            }
        }
    }

    Ok(tokens)
}

/// Nested color groups become `group-key`; a `DEFAULT` key names the group.
fn flatten_colors(
    tokens: &mut TokenMap,
    name: &str,
    value: &Value,
    path: &str,
) -> Result<(), ShapeError> {
    match value {
        Value::Object(group) => {
            for (key, nested) in group {
                let flat = if key == DEFAULT_KEY {
                    name.to_string()
                } else {
                    format!("{name}-{key}")
                };
                flatten_colors(tokens, &flat, nested, &join(path, key))?;
            }
            Ok(())
        }
        _ => {
            let css = scalar(value, path, Some(TokenCategory::Color))?;
            tokens.insert(name.to_string(), css);
            Ok(())
        }
    }
}

fn parse_font_stack(value: &Value, path: &str) -> Result<TokenValue, ShapeError> {
    match value {
        Value::String(family) => Ok(TokenValue::FontStack(vec![family.clone()])),
        Value::Array(items) => {
            let families = items
                .iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(invalid(
                        format!("{path}[{idx}]"),
                        Some(TokenCategory::FontFamily),
                        "a font family name",
                        other,
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TokenValue::FontStack(families))
        }
        other => Err(invalid(
            path.to_string(),
            Some(TokenCategory::FontFamily),
            "a font family name or list of names",
            other,
        )),
    }
}

fn parse_keyframes(value: &Value, path: &str) -> Result<TokenValue, ShapeError> {
    let stops = expect_object(
        value,
        path,
        Some(TokenCategory::Keyframes),
        "a mapping of keyframe offsets",
    )?;

    let mut keyframes = Keyframes::new();
    for (offset, props) in stops {
        let stop_path = join(path, offset);
        let props = expect_object(
            props,
            &stop_path,
            Some(TokenCategory::Keyframes),
            "a mapping of CSS properties",
        )?;

        let mut properties = indexmap::IndexMap::with_capacity(props.len());
        for (name, css) in props {
            let css = scalar(css, &join(&stop_path, name), Some(TokenCategory::Keyframes))?;
            properties.insert(name.clone(), css);
        }

        keyframes.push(KeyframeStop {
            offset: KeyframeOffset::new(offset.clone()),
            properties,
        });
    }

    Ok(TokenValue::Keyframes(keyframes))
}

/// Strings pass through; numbers are written back as CSS text.
fn scalar(
    value: &Value,
    path: &str,
    category: Option<TokenCategory>,
) -> Result<String, ShapeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(invalid(path.to_string(), category, "a string or number", other)),
    }
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
    category: Option<TokenCategory>,
    expected: &'static str,
) -> Result<&'a Map<String, Value>, ShapeError> {
    value
        .as_object()
        .ok_or_else(|| invalid(path.to_string(), category, expected, value))
}

fn invalid(
    path: String,
    category: Option<TokenCategory>,
    expected: &'static str,
    found: &Value,
) -> ShapeError {
    ShapeError::InvalidShape {
        path,
        category,
        expected,
        found: describe(found),
    }
}

/// Short description of a node's kind for error messages
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_all_kinds() {
        let node = json!({
            "colors": { "gold": "#d4af37" },
            "fontFamily": { "sans": ["Montserrat", "sans-serif"] },
            "spacing": { "72": "18rem" },
            "scale": { "102": 1.02 },
            "keyframes": {
                "fadeIn": {
                    "0%": { "opacity": "0" },
                    "100%": { "opacity": 1 }
                }
            }
        });

        let (ext, warnings) = ThemeExtension::from_value(&node, "theme.extend").unwrap();
        assert!(warnings.is_empty());
        assert_eq!(ext.get(TokenCategory::Color, "gold"), Some(&TokenValue::css("#d4af37")));
        assert_eq!(
            ext.get(TokenCategory::FontFamily, "sans"),
            Some(&TokenValue::font_stack(["Montserrat", "sans-serif"]))
        );
        assert_eq!(ext.get(TokenCategory::Scale, "102"), Some(&TokenValue::css("1.02")));

        let fade = ext
            .get(TokenCategory::Keyframes, "fadeIn")
            .and_then(TokenValue::as_keyframes)
            .unwrap();
        assert_eq!(fade.len(), 2);
        assert_eq!(fade.get("100%").unwrap().properties["opacity"], "1");
        assert!(ext.category(TokenCategory::Shadow).is_none());
    }

    #[test]
    fn test_nested_colors_flatten() {
        let node = json!({
            "colors": {
                "coffee": {
                    "DEFAULT": "#6f4e37",
                    "primary": "rgb(99 102 241)",
                    "bean": { "dark": "#3b2418" }
                }
            }
        });

        let (ext, _) = ThemeExtension::from_value(&node, "theme.extend").unwrap();
        let colors = ext.category(TokenCategory::Color).unwrap();
        let keys: Vec<&str> = colors.keys().collect();
        assert_eq!(keys, vec!["coffee", "coffee-bean-dark", "coffee-primary"]);
    }

    #[test]
    fn test_unknown_category_warns() {
        let node = json!({
            "screens": { "3xl": "1920px" },
            "spacing": { "84": "21rem" }
        });

        let (ext, warnings) = ThemeExtension::from_value(&node, "theme.extend").unwrap();
        assert_eq!(
            warnings,
            vec![Warning::UnknownCategory {
                name: "screens".to_string(),
                path: "theme.extend.screens".to_string(),
            }]
        );
        assert!(ext.get(TokenCategory::Spacing, "84").is_some());
    }

    #[test]
    fn test_category_not_a_mapping() {
        let node = json!({ "boxShadow": ["0 5px 15px"] });
        let err = ThemeExtension::from_value(&node, "theme.extend").unwrap_err();

        assert_eq!(err.category(), Some(TokenCategory::Shadow));
        assert_eq!(err.path(), "theme.extend.boxShadow");
        assert_eq!(
            err.to_string(),
            "invalid shape at `theme.extend.boxShadow`: \
             expected a mapping of token keys, found a list"
        );
    }

    #[test]
    fn test_extension_not_a_mapping() {
        let err = ThemeExtension::from_value(&json!("colors"), "theme.extend").unwrap_err();
        assert_eq!(err.category(), None);
        assert_eq!(err.path(), "theme.extend");
    }

    #[test]
    fn test_nested_groups_only_for_colors() {
        let node = json!({ "spacing": { "gutter": { "sm": "1rem" } } });
        let err = ThemeExtension::from_value(&node, "theme.extend").unwrap_err();
        assert_eq!(err.category(), Some(TokenCategory::Spacing));
        assert_eq!(err.path(), "theme.extend.spacing.gutter");
    }

    #[test]
    fn test_keyframe_stop_must_be_mapping() {
        let node = json!({ "keyframes": { "pulse": { "50%": "opacity: .5" } } });
        let err = ThemeExtension::from_value(&node, "theme.extend").unwrap_err();
        assert_eq!(err.category(), Some(TokenCategory::Keyframes));
        assert_eq!(err.path(), "theme.extend.keyframes.pulse.50%");
    }

    #[test]
    fn test_font_stack_rejects_non_strings() {
        let node = json!({ "fontFamily": { "sans": ["Inter", 3] } });
        let err = ThemeExtension::from_value(&node, "theme.extend").unwrap_err();
        assert_eq!(err.path(), "theme.extend.fontFamily.sans[1]");
    }

    #[test]
    fn test_builder_and_from_iter_agree() {
        let built = ThemeExtension::builder()
            .token(TokenCategory::Color, "primary", "#fff")
            .token(TokenCategory::BorderWidth, "3", "3px")
            .build();
        let collected: ThemeExtension = vec![
            TokenEntry::new(TokenCategory::Color, "primary", "#fff"),
            TokenEntry::new(TokenCategory::BorderWidth, "3", "3px"),
        ]
        .into_iter()
        .collect();

        assert_eq!(built, collected);
        assert!(!built.is_empty());
        assert!(ThemeExtension::empty().is_empty());
    }
}
