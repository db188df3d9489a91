//! Swatch design tokens
//!
//! Token model and resolution for utility-class style generators.
//!
//! # Overview
//!
//! A theme is a set of named design values grouped into a closed list of
//! categories ([`TokenCategory`]): colors, font families, shadows, background
//! images, spacing, border widths, scale factors, animations and keyframes.
//!
//! - [`TokenSet`]: a complete token set, e.g. the framework defaults from
//!   [`framework_defaults`]
//! - [`ThemeExtension`]: a partial set layered on top of the defaults
//! - [`resolve`]: merges the two into a [`ResolvedTheme`]
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_tokens::{framework_defaults, resolve, ThemeExtension, TokenCategory, TokenValue};
//!
//! let extension = ThemeExtension::builder()
//!     .token(TokenCategory::Color, "gold", "#d4af37")
//!     .token(TokenCategory::Spacing, "84", "21rem")
//!     .build();
//!
//! let theme = resolve(&framework_defaults(), &extension);
//! assert_eq!(theme.get(TokenCategory::Color, "gold"), Some(&TokenValue::css("#d4af37")));
//! assert!(theme.get(TokenCategory::Color, "white").is_some());
//! ```
//!
//! # Merge rules
//!
//! Merging is additive per category: keys from both sides survive, and the
//! extension wins on collisions. Keyframes are replaced by name, never merged
//! stop by stop. Values are opaque CSS and are not validated; use
//! [`ResolvedTheme::lint`] for optional consistency checks.

pub mod animation;
pub mod category;
pub mod defaults;
pub mod error;
pub mod extension;
pub mod lint;
pub mod resolve;
pub mod set;
pub mod value;

// Re-export commonly used types
pub use animation::{AnimationDirection, AnimationShorthand, Delay, FillMode, IterationCount};
pub use category::TokenCategory;
pub use defaults::framework_defaults;
pub use error::{ShapeError, Warning};
pub use extension::{describe as describe_node, ThemeExtension, ThemeExtensionBuilder};
pub use lint::{referenced_keyframes, LintFinding};
pub use resolve::{resolve, resolve_layers, resolve_value, Resolution, ResolvedTheme};
pub use set::{TokenEntry, TokenMap, TokenSet};
pub use value::{KeyframeOffset, KeyframeStop, Keyframes, TokenValue};
