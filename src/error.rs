//! Error taxonomy for ceremony generation
//!
//! Every failure is fatal: the run stops at the first error and the
//! binary reports it on stderr with a non-zero exit code.

use std::io;
use std::path::PathBuf;

/// Errors raised while loading a ceremony document or emitting its lines
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Input path is missing or unreadable
    #[error("cannot read input file {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input content is not a JSON object
    #[error("{origin} is not a valid JSON object: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// An entry's value is not an array with at least two elements
    #[error("entry `{key}` must be an array with at least 2 elements, found {found}")]
    Shape { key: String, found: String },

    /// Generator settings are unusable
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Output sink rejected a write
    #[error("failed to write generated lines: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
