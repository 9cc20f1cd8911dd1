//! Catalog loading errors.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Reference data could not be loaded.
///
/// This is fatal: a process that fails to load its catalog must not serve
/// planning requests.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A data file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV
    #[error("{file}: CSV error: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row
    #[error("{file}: missing required column '{column}'")]
    MissingColumn { file: String, column: &'static str },

    /// A cell could not be parsed
    #[error("{file}:{line}: invalid {column}: {reason}")]
    InvalidValue {
        file: String,
        line: u64,
        column: &'static str,
        reason: String,
    },

    /// A row parsed but violates a catalog invariant
    #[error("{file}:{line}: {source}")]
    Invalid {
        file: String,
        line: u64,
        #[source]
        source: DomainError,
    },
}
