use std::path::PathBuf;

use thiserror::Error;

use crate::tokens::TokenCategory;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme `{theme}` is missing required {category} token `{name}`")]
    MissingToken {
        theme: String,
        category: TokenCategory,
        name: &'static str,
    },

    #[error("unknown {category} token `{name}`")]
    UnknownToken {
        category: TokenCategory,
        name: String,
    },

    #[error("unknown token category `{0}` (expected colors, typography, spacing, shadows, borders or animations)")]
    UnknownCategory(String),

    #[error("{category} token `{name}` expects a {expected} value, got a {found}")]
    TypeMismatch {
        category: TokenCategory,
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value for {category} token `{name}`: {reason}")]
    InvalidValue {
        category: TokenCategory,
        name: String,
        reason: String,
    },

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
