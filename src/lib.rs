//! aardvark_export library: DuckDB catalog to Aardvark JSON documents
//!
//! Reads the `resources` table of a catalog database, together with the
//! optional `resources_mv` (multi-valued fields) and `distributions`
//! (external links) tables, and writes one OpenGeoMetadata Aardvark JSON
//! file per resource.
//!
//! # Example
//!
//! ```no_run
//! use aardvark_export::{export_json, ExportOptions, ExportOutcome};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = ExportOptions {
//!     db_path: PathBuf::from("records.duckdb"),
//!     output_dir: PathBuf::from("metadata"),
//! };
//!
//! if let ExportOutcome::Exported(report) = export_json(&opts)? {
//!     println!("Exported {} records.", report.written);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
#[allow(missing_docs)]
pub mod storage;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt};
pub use error_handling::ExportError;
pub use export::{export_json, ExportOptions, ExportOutcome, ExportReport};
