//! Token values
//!
//! Most tokens carry an opaque CSS string. Two categories are structural:
//! font families are ordered fallback stacks, and keyframes are ordered
//! sequences of `(offset, properties)` stops.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The value of a single token.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// An opaque CSS value (color, shadow, gradient, length, animation shorthand, ...)
    Css(String),
    /// An ordered font-family fallback list
    FontStack(Vec<String>),
    /// A keyframes definition
    Keyframes(Keyframes),
}

impl TokenValue {
    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    pub fn font_stack<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::FontStack(families.into_iter().map(Into::into).collect())
    }

    /// The CSS string, if this is a scalar value.
    pub fn as_css(&self) -> Option<&str> {
        match self {
            Self::Css(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_font_stack(&self) -> Option<&[String]> {
        match self {
            Self::FontStack(families) => Some(families),
            _ => None,
        }
    }

    pub fn as_keyframes(&self) -> Option<&Keyframes> {
        match self {
            Self::Keyframes(kf) => Some(kf),
            _ => None,
        }
    }

    /// Render scalar and font-stack values as a single CSS string.
    ///
    /// Keyframes have no single-value form and return `None`.
    pub fn to_css(&self) -> Option<String> {
        match self {
            Self::Css(s) => Some(s.clone()),
            Self::FontStack(families) => Some(families.join(", ")),
            Self::Keyframes(_) => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

impl From<Keyframes> for TokenValue {
    fn from(value: Keyframes) -> Self {
        Self::Keyframes(value)
    }
}

// ============================================================================
// Keyframes
// ============================================================================

/// Offset selector of a keyframe stop, kept exactly as written
/// (`0%`, `from`, `to`, `75%, 100%`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyframeOffset(String);

impl KeyframeOffset {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the selector into positions in `0.0..=1.0`.
    ///
    /// `from` is 0, `to` is 1 and `N%` is N / 100. A comma-separated selector
    /// yields one position per entry. Returns `None` if any entry is not a
    /// valid offset.
    pub fn positions(&self) -> Option<Vec<f32>> {
        self.0.split(',').map(|part| parse_position(part.trim())).collect()
    }
}

fn parse_position(input: &str) -> Option<f32> {
    if input.eq_ignore_ascii_case("from") {
        return Some(0.0);
    }
    if input.eq_ignore_ascii_case("to") {
        return Some(1.0);
    }
    let percent = input.strip_suffix('%')?.trim().parse::<f32>().ok()?;
    if !(0.0..=100.0).contains(&percent) {
        return None;
    }
    Some(percent / 100.0)
}

/// A single keyframe stop: an offset and the properties applied there.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeStop {
    pub offset: KeyframeOffset,
    /// Property name -> CSS value, in declaration order
    pub properties: IndexMap<String, String>,
}

/// An ordered keyframes definition
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keyframes {
    stops: Vec<KeyframeStop>,
}

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stop. Stops keep the order they are added in.
    pub fn stop<I, K, V>(mut self, offset: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.push(KeyframeStop {
            offset: KeyframeOffset::new(offset),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        });
        self
    }

    pub fn push(&mut self, stop: KeyframeStop) {
        self.stops.push(stop);
    }

    pub fn stops(&self) -> &[KeyframeStop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Find the stop declared with exactly this selector
    pub fn get(&self, offset: &str) -> Option<&KeyframeStop> {
        self.stops.iter().find(|s| s.offset.as_str() == offset)
    }
}

impl Serialize for Keyframes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stops.len()))?;
        for stop in &self.stops {
            map.serialize_entry(stop.offset.as_str(), &stop.properties)?;
        }
        map.end()
    }
}
