//! Table source port
//!
//! Defines where roster and response rows come from.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::Table;

/// Why a source could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    /// Local file does not exist
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Remote fetch failed
    #[error("fetch failed for {url}: {reason}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// What went wrong
        reason: String,
    },

    /// Content is not valid CSV
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error while reading
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Source has no header row
    #[error("source has no header row")]
    NoHeader,

    /// A required column is absent
    #[error("missing required column '{column}' (looked for: {aliases})")]
    MissingColumn {
        /// Logical column name
        column: String,
        /// Header names that were tried
        aliases: String,
    },
}

/// Source of untyped rows
pub trait TableSource {
    /// Load the full table
    fn load(&self) -> Result<Table, LoadError>;

    /// Short description for logs and error messages
    fn describe(&self) -> String;
}
