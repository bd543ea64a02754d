use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NikError {
    #[error("Failed to read region data from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid region data JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed region data: {0}")]
    MalformedDataset(String),

    #[error("District entry {code} is missing the ' -- ' postal code separator: {entry:?}")]
    MalformedDistrict { code: u32, entry: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NikError>;
