//! JSON export functionality.
//!
//! Exports every resource of the catalog database to its own Aardvark JSON
//! document, `<output_dir>/<id>.json`.

use std::fs;

use log::{debug, info, warn};

use super::document::write_document;
use super::merge::{merge_record, DistributionIndex, MultiValuedIndex};
use super::value::is_truthy;
use super::{ExportOptions, ExportOutcome, ExportReport};
use crate::config::ID_FIELD;
use crate::error_handling::ExportError;
use crate::storage::read_source_tables;

/// Exports the catalog database to one JSON file per resource.
///
/// All three tables are read into memory and the database is closed before
/// the output directory is created or any file is written. Rows whose `id`
/// is absent or falsy are skipped.
///
/// # Returns
///
/// `ExportOutcome::DatabaseMissing` or `ExportOutcome::ResourcesTableMissing`
/// when there is nothing to export, otherwise `ExportOutcome::Exported` with
/// the number of files written.
///
/// # Errors
///
/// Returns `ExportError::Database` if the database cannot be opened or read,
/// `ExportError::TableShape` if a side table does not have exactly three
/// columns, and `ExportError::Io` if the output directory or a file cannot be
/// written.
pub fn export_json(opts: &ExportOptions) -> Result<ExportOutcome, ExportError> {
    if !opts.db_path.exists() {
        warn!("Database not found at {}", opts.db_path.display());
        return Ok(ExportOutcome::DatabaseMissing(opts.db_path.clone()));
    }

    let Some(tables) = read_source_tables(&opts.db_path)? else {
        warn!("No resources table in {}", opts.db_path.display());
        return Ok(ExportOutcome::ResourcesTableMissing);
    };

    fs::create_dir_all(&opts.output_dir).map_err(|e| ExportError::io(&opts.output_dir, e))?;

    let multi_valued = MultiValuedIndex::from_rows(tables.multi_valued);
    let distributions = DistributionIndex::from_rows(tables.distributions);

    let mut report = ExportReport {
        written: 0,
        skipped: 0,
        output_dir: opts.output_dir.clone(),
    };

    for mut record in tables.resources {
        let Some(id) = record.get(ID_FIELD).filter(|id| is_truthy(id)).cloned() else {
            debug!("Skipping resource row without an id");
            report.skipped += 1;
            continue;
        };

        merge_record(&mut record, &id, &multi_valued, &distributions);
        let path = write_document(&opts.output_dir, &id, record)?;
        debug!("Wrote {}", path.display());
        report.written += 1;
    }

    info!(
        "Exported {} records to {} ({} skipped)",
        report.written,
        report.output_dir.display(),
        report.skipped
    );
    Ok(ExportOutcome::Exported(report))
}
