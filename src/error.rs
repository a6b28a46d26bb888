use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DifflyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to decode shared value: {0}")]
    Decode(String),

    #[error("nothing to export: both texts are empty")]
    NothingToExport,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DifflyError>;
