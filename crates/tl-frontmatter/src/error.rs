//! Front matter error types.

use std::path::PathBuf;

use thiserror::Error;

/// Why a post's text could not be read as front matter plus body.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no front matter: first line must be '---', '+++', or '{{'")]
    NoFrontMatter,

    #[error("front matter opened with '{delimiter}' is never closed")]
    Unterminated { delimiter: &'static str },

    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid TOML front matter: {0}")]
    TomlLayout(#[from] toml_edit::TomlError),

    #[error("invalid JSON front matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("front matter is not a key/value mapping")]
    NotAMapping,

    #[error("front matter key '{key}' must be {expected}")]
    InvalidField {
        key: &'static str,
        expected: &'static str,
    },

    #[error("rewritten front matter does not round-trip: {0}")]
    RoundTrip(String),
}

/// Errors reading or rewriting a post file.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed post {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
