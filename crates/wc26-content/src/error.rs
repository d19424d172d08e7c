//! Error types for wc26-content

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] wc26_search::CatalogError),
}

pub type Result<T> = std::result::Result<T, ContentError>;
