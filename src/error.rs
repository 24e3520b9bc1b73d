//! Crate-level error type.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::css::ParseError;

/// Errors surfaced by scanning, compiling, and watching.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to walk content pattern: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("usage index unavailable: no content source configured")]
    UsageUnavailable,

    #[error("stylesheet parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize usage index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
