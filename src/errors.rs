//! Error types for the dump visualizer
//!
//! Every error is fatal: the tool stops before writing any output. There are two
//! families: input errors (unreadable file, bad encoding, invalid JSON, schema
//! mismatch) and the degenerate-data error [`VisError::EmptyDump`], raised when
//! nothing in the dump has a size to scale against.

use std::path::PathBuf;
use thiserror::Error;

pub type VisResult<T> = Result<T, VisError>;

#[derive(Debug, Error)]
pub enum VisError {
    /// Dump file could not be read
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dump bytes are neither UTF-16LE nor UTF-8
    #[error("dump is not valid text: {0}")]
    Encoding(String),

    #[error("dump is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Required schema key is absent
    #[error("missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// Schema key is present but has the wrong shape
    #[error("invalid field '{field}' in {context}: {reason}")]
    InvalidField {
        field: String,
        context: String,
        reason: String,
    },

    /// No committed allocation or block with a non-zero size
    #[error("dump contains no committed allocations or blocks with a non-zero size")]
    EmptyDump,

    #[error("failed to load font '{}': {reason}", .path.display())]
    Font { path: PathBuf, reason: String },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

impl VisError {
    pub(crate) fn missing(field: &str, context: &str) -> Self {
        VisError::MissingField {
            field: field.to_string(),
            context: context.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, context: &str, reason: impl Into<String>) -> Self {
        VisError::InvalidField {
            field: field.to_string(),
            context: context.to_string(),
            reason: reason.into(),
        }
    }
}
