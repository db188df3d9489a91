//! Token categories

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The closed set of token categories a theme can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    #[serde(rename = "colors")]
    Color,
    #[serde(rename = "fontFamily")]
    FontFamily,
    #[serde(rename = "boxShadow")]
    Shadow,
    #[serde(rename = "backgroundImage")]
    BackgroundImage,
    #[serde(rename = "spacing")]
    Spacing,
    #[serde(rename = "borderWidth")]
    BorderWidth,
    #[serde(rename = "scale")]
    Scale,
    #[serde(rename = "animation")]
    Animation,
    #[serde(rename = "keyframes")]
    Keyframes,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 9] = [
        TokenCategory::Color,
        TokenCategory::FontFamily,
        TokenCategory::Shadow,
        TokenCategory::BackgroundImage,
        TokenCategory::Spacing,
        TokenCategory::BorderWidth,
        TokenCategory::Scale,
        TokenCategory::Animation,
        TokenCategory::Keyframes,
    ];

    /// Key used for this category in theme documents and serialized output.
    pub fn config_key(self) -> &'static str {
        match self {
            Self::Color => "colors",
            Self::FontFamily => "fontFamily",
            Self::Shadow => "boxShadow",
            Self::BackgroundImage => "backgroundImage",
            Self::Spacing => "spacing",
            Self::BorderWidth => "borderWidth",
            Self::Scale => "scale",
            Self::Animation => "animation",
            Self::Keyframes => "keyframes",
        }
    }

    /// Look up a category by its document key. Unknown keys return `None`.
    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.config_key() == key)
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.config_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_keys_round_trip() {
        for category in TokenCategory::ALL {
            assert_eq!(
                TokenCategory::from_config_key(category.config_key()),
                Some(category)
            );
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(TokenCategory::from_config_key("screens"), None);
        // Keys are case sensitive, as in the documents that declare them.
        assert_eq!(TokenCategory::from_config_key("Colors"), None);
    }

    #[test]
    fn test_serde_uses_config_key() {
        let json = serde_json::to_string(&TokenCategory::Shadow).unwrap();
        assert_eq!(json, "\"boxShadow\"");
    }
}
