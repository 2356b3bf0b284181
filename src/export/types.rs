//! Export types and options.

use std::path::PathBuf;

use crate::config::{DEFAULT_DB_PATH, DEFAULT_OUTPUT_DIR};

/// Options for exporting data.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// DuckDB database to read
    pub db_path: PathBuf,
    /// Directory receiving one `<id>.json` per record
    pub output_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Summary of a completed export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    /// Number of record files written
    pub written: usize,
    /// Resource rows skipped for lacking a usable `id`
    pub skipped: usize,
    /// Directory the files were written to
    pub output_dir: PathBuf,
}

/// How an export run ended.
///
/// The two "nothing to do" outcomes are normal results, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Records were exported (possibly zero of them).
    Exported(ExportReport),
    /// The database file does not exist; nothing was created.
    DatabaseMissing(PathBuf),
    /// The database has no `resources` table; nothing was written.
    ResourcesTableMissing,
}
