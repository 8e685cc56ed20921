use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("movie '{0}' not found")]
    MovieNotFound(String),

    #[error("invalid genre '{0}'")]
    InvalidGenre(String),

    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    #[error("invalid collection '{0}'")]
    InvalidCollection(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
