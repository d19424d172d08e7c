//! Error types for wc26-core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid group label: {0:?}")]
    InvalidGroupLabel(String),

    #[error("Invalid site path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
