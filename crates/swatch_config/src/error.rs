use std::path::PathBuf;

use swatch_tokens::ShapeError;
use thiserror::Error;

use crate::format::DocumentFormat;

/// Fatal problems loading a theme configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} document: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },

    #[error("unsupported config file `{}` (expected .json, .toml, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    /// The shape error, if this is one
    pub fn as_shape(&self) -> Option<&ShapeError> {
        match self {
            Self::Shape(err) => Some(err),
            _ => None,
        }
    }
}
