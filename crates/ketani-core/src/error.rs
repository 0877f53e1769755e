//! Error types for ketani-core.
//!
//! Queries themselves cannot fail; errors only arise while building a catalog
//! or attaching a search session to a runtime.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("catalog entry #{index} has an empty title")]
    EmptyTitle { index: usize },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("search session requires a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
