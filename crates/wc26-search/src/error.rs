//! Error types for wc26-search

use thiserror::Error;

use crate::SourceKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate identifier {id:?} in {source_kind} source")]
    DuplicateIdentifier { source_kind: SourceKind, id: String },

    #[error("Malformed {source_kind} record {id:?}: {reason}")]
    MalformedRecord {
        source_kind: SourceKind,
        id: String,
        reason: String,
    },

    #[error("Core error: {0}")]
    Core(#[from] wc26_core::CoreError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
