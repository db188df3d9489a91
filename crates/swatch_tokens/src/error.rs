use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::category::TokenCategory;

/// A theme node does not have the structure its position requires.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("invalid shape at `{path}`: expected {expected}, found {found}")]
    InvalidShape {
        /// Dotted document path of the offending node
        path: String,
        /// Category the node belongs to, when known
        category: Option<TokenCategory>,
        expected: &'static str,
        found: &'static str,
    },
}

impl ShapeError {
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidShape { path, .. } => path,
        }
    }

    pub fn category(&self) -> Option<TokenCategory> {
        match self {
            Self::InvalidShape { category, .. } => *category,
        }
    }
}

/// Non-fatal problems found while reading a theme
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A category outside [`TokenCategory::ALL`]; its entries were ignored.
    UnknownCategory { name: String, path: String },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory { name, path } => {
                write!(f, "unknown token category `{name}` at `{path}` was ignored")
            }
        }
    }
}
