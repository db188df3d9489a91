//! Document formats
//!
//! Every supported format decodes into one `serde_json::Value` tree so the
//! shape checks only exist once.

use serde_json::{Map, Number, Value};
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::warn;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }

    /// Decode document text into a value tree
    pub fn decode(self, src: &str) -> Result<Value, ConfigError> {
        match self {
            Self::Json => serde_json::from_str(src).map_err(|e| self.parse_error(e)),
            Self::Toml => toml::from_str(src).map_err(|e| self.parse_error(e)),
            Self::Yaml => {
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(src).map_err(|e| self.parse_error(e))?;
                yaml_to_json(yaml)
            }
        }
    }

    fn parse_error(self, err: impl Display) -> ConfigError {
        ConfigError::Parse {
            format: self,
            message: err.to_string(),
        }
    }
}

impl Display for DocumentFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// YAML allows non-string keys (`72: 18rem`); scalar keys become strings.
///
/// Float keys are written in their shortest form, so `0.50:` becomes `"0.5"`.
/// Quote the key to keep it as written.
fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, ConfigError> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) if n.is_f64() => {
                        let normalized = n.to_string();
                        warn!(key = %normalized, "unquoted float mapping key was normalized");
                        normalized
                    }
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => {
                        return Err(ConfigError::Parse {
                            format: DocumentFormat::Yaml,
                            message: format!("unsupported mapping key {other:?}"),
                        })
                    }
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<Value, ConfigError> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Number(i.into()));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::Number(u.into()));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| ConfigError::Parse {
            format: DocumentFormat::Yaml,
            message: format!("number {n} has no JSON representation"),
        })
}
