//! Error type definitions.
//!
//! This module defines the error types returned by the library.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the export pipeline.
///
/// Missing inputs (no database file, no `resources` table) are not errors;
/// they are reported through [`crate::export::ExportOutcome`]. Everything
/// here aborts the export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The database could not be opened or queried.
    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    /// Creating the output directory or writing a record file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A side table does not have the (resource id, name, value) shape.
    #[error("Table {table} has {found} columns, expected {expected}")]
    TableShape {
        /// Offending table
        table: String,
        /// Required column count
        expected: usize,
        /// Column count found
        found: usize,
    },

    /// A record could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
