//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DB_PATH, DEFAULT_OUTPUT_DIR};
use crate::export::ExportOptions;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Both paths are positional and optional, so a bare invocation exports the
/// bundled catalog database into `./metadata`.
///
/// # Examples
///
/// ```bash
/// # Defaults: web/public/records.duckdb -> metadata/
/// aardvark_export
///
/// # Explicit database and output directory
/// aardvark_export ./catalog.duckdb ./out
///
/// # Verbose logging, one JSON object per log line
/// aardvark_export ./catalog.duckdb ./out --log-level debug --log-format json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "aardvark_export",
    about = "Exports DuckDB catalog records to one Aardvark JSON file per record."
)]
pub struct Opt {
    /// DuckDB database to read
    #[arg(value_parser, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Directory to write `<id>.json` files into
    #[arg(value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for ExportOptions {
    fn from(opt: &Opt) -> Self {
        ExportOptions {
            db_path: opt.db_path.clone(),
            output_dir: opt.output_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_export_options_from_opt() {
        let opt = Opt::try_parse_from(["aardvark_export", "db.duckdb", "out"])
            .expect("Should parse positional paths");
        let options = ExportOptions::from(&opt);
        assert_eq!(options.db_path, PathBuf::from("db.duckdb"));
        assert_eq!(options.output_dir, PathBuf::from("out"));
    }
}
