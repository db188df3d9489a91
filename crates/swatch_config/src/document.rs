//! Theme configuration documents
//!
//! A document has three recognized top-level fields:
//!
//! ```yaml
//! content: ["./src/**/*.{vue,js,ts,jsx,tsx}"]   # globs for the file scanner
//! theme:
//!   colors: { ... }      # replaces the default category
//!   extend:
//!     colors: { ... }    # layered on top of the defaults
//! plugins: []            # passed through untouched
//! ```
//!
//! Anything else is ignored so newer documents keep loading.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use swatch_tokens::{
    describe_node, resolve_layers, ResolvedTheme, ShapeError, ThemeExtension, TokenSet, Warning,
};
use tracing::debug;

use crate::error::ConfigError;
use crate::format::DocumentFormat;

const EXTEND_KEY: &str = "extend";

/// Top-level fields as they appear in the document, before shape checks
#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    content: Value,
    #[serde(default)]
    theme: Value,
    #[serde(default)]
    plugins: Value,
}

/// A loaded, immutable theme configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeConfig {
    content: Vec<String>,
    replace: ThemeExtension,
    extend: ThemeExtension,
    plugins: Vec<Value>,
}

/// A configuration together with the non-fatal warnings found while reading it
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedConfig {
    pub config: ThemeConfig,
    pub warnings: Vec<Warning>,
}

impl ThemeConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<LoadedConfig, ConfigError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let loaded = Self::parse_str(&src, format)?;
        debug!(
            path = %path.display(),
            %format,
            warnings = loaded.warnings.len(),
            "loaded theme config"
        );
        Ok(loaded)
    }

    /// Parse document text in the given format
    pub fn parse_str(src: &str, format: DocumentFormat) -> Result<LoadedConfig, ConfigError> {
        let value = format.decode(src)?;
        Ok(Self::from_value(&value)?)
    }

    /// Build a configuration from a decoded document tree
    pub fn from_value(value: &Value) -> Result<LoadedConfig, ShapeError> {
        if !value.is_object() {
            return Err(invalid("", "a mapping", value));
        }
        let raw = RawDocument::deserialize(value).map_err(|_| invalid("", "a mapping", value))?;

        let content = parse_content(&raw.content)?;
        let plugins = match raw.plugins {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            other => return Err(invalid("plugins", "a list", &other)),
        };

        let mut warnings = Vec::new();
        let (replace, extend) = match &raw.theme {
            Value::Null => (ThemeExtension::empty(), ThemeExtension::empty()),
            Value::Object(theme) => {
                let (replace, extend) = split_theme(theme);
                let (replace, mut replace_warnings) =
                    ThemeExtension::from_value(&replace, "theme")?;
                let (extend, mut extend_warnings) = match extend {
                    None | Some(Value::Null) => (ThemeExtension::empty(), Vec::new()),
                    Some(node) => ThemeExtension::from_value(node, "theme.extend")?,
                };
                warnings.append(&mut replace_warnings);
                warnings.append(&mut extend_warnings);
                (replace, extend)
            }
            other => return Err(invalid("theme", "a mapping", other)),
        };

        Ok(LoadedConfig {
            config: Self {
                content,
                replace,
                extend,
                plugins,
            },
            warnings,
        })
    }

    /// Globs handed to the file scanner, in declaration order
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Categories declared directly under `theme`
    pub fn replacements(&self) -> &ThemeExtension {
        &self.replace
    }

    /// Categories declared under `theme.extend`
    pub fn extension(&self) -> &ThemeExtension {
        &self.extend
    }

    /// Plugin references, untouched
    pub fn plugins(&self) -> &[Value] {
        &self.plugins
    }

    /// Apply this configuration to a default token set
    pub fn resolve(&self, defaults: &TokenSet) -> ResolvedTheme {
        resolve_layers(defaults, &self.replace, &self.extend)
    }
}

/// Separate `theme.extend` from the replacement categories beside it
fn split_theme(theme: &Map<String, Value>) -> (Value, Option<&Value>) {
    let replace: Map<String, Value> = theme
        .iter()
        .filter(|(key, _)| key.as_str() != EXTEND_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    (Value::Object(replace), theme.get(EXTEND_KEY))
}

fn parse_content(node: &Value) -> Result<Vec<String>, ShapeError> {
    match node {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::String(glob) => Ok(glob.clone()),
                other => Err(invalid(&format!("content[{idx}]"), "a glob string", other)),
            })
            .collect(),
        other => Err(invalid("content", "a list of glob strings", other)),
    }
}

fn invalid(path: &str, expected: &'static str, found: &Value) -> ShapeError {
    ShapeError::InvalidShape {
        path: path.to_string(),
        category: None,
        expected,
        found: describe_node(found),
    }
}
