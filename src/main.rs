//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `aardvark_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use aardvark_export::initialization::init_logger_with;
use aardvark_export::{export_json, ExportOptions, ExportOutcome, Opt};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let options = ExportOptions::from(&opt);
    println!(
        "Exporting from {} to {}",
        options.db_path.display(),
        options.output_dir.display()
    );

    match export_json(&options).context("Export failed") {
        Ok(ExportOutcome::Exported(report)) => {
            println!("Exported {} records.", report.written);
            Ok(())
        }
        Ok(ExportOutcome::DatabaseMissing(path)) => {
            println!("Database not found at {}", path.display());
            Ok(())
        }
        Ok(ExportOutcome::ResourcesTableMissing) => {
            println!("No resources table found.");
            Ok(())
        }
        Err(e) => {
            eprintln!("aardvark_export error: {:#}", e);
            process::exit(1);
        }
    }
}
