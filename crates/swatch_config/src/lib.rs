//! Swatch theme configuration
//!
//! Loads theme configuration documents (JSON, TOML or YAML) into an
//! immutable [`ThemeConfig`] and applies them to a default token set.
//!
//! ```rust
//! use swatch_config::{DocumentFormat, ThemeConfig};
//! use swatch_tokens::{framework_defaults, TokenCategory};
//!
//! let src = r#"
//! content = ["./index.html"]
//!
//! [theme.extend.spacing]
//! 84 = "21rem"
//! "#;
//!
//! let loaded = ThemeConfig::parse_str(src, DocumentFormat::Toml)?;
//! let theme = loaded.config.resolve(&framework_defaults());
//! assert!(theme.get(TokenCategory::Spacing, "84").is_some());
//! # Ok::<(), swatch_config::ConfigError>(())
//! ```
//!
//! Structural problems fail fast with [`ConfigError::Shape`]. Unknown token
//! categories are skipped and returned as [`Warning`]s.

mod document;
mod error;
mod format;

pub use document::{LoadedConfig, ThemeConfig};
pub use error::ConfigError;
pub use format::DocumentFormat;
pub use swatch_tokens::Warning;
