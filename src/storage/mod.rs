//! Catalog database access.
//!
//! Reads the three source tables into memory in one pass and releases the
//! connection before anything is written.

pub mod connection;
pub mod models;
pub mod tables;

use std::path::Path;

use log::info;

use crate::error_handling::ExportError;

// Re-export commonly used items
pub use connection::{close, open_read_only};
pub use models::{DistributionRow, MultiValuedRow, Record, SourceTables};
pub use tables::SourceTable;

/// Reads `resources` and, when present, `resources_mv` and `distributions`.
///
/// Returns `Ok(None)` when the database has no `resources` table. The
/// connection is closed before returning in every non-error path.
pub fn read_source_tables(db_path: &Path) -> Result<Option<SourceTables>, ExportError> {
    let conn = open_read_only(db_path)?;
    let names = tables::list_tables(&conn)?;

    if !tables::has_table(&names, SourceTable::Resources) {
        close(conn)?;
        return Ok(None);
    }

    let has_mv = tables::has_table(&names, SourceTable::ResourcesMv);
    let has_dist = tables::has_table(&names, SourceTable::Distributions);
    info!("Reading {} (resources_mv: {has_mv}, distributions: {has_dist})", db_path.display());

    let resources = tables::read_records(&conn, SourceTable::Resources)?;

    let multi_valued = if has_mv {
        tables::read_triples(&conn, SourceTable::ResourcesMv)?
            .into_iter()
            .map(MultiValuedRow::from)
            .collect()
    } else {
        Vec::new()
    };

    let distributions = if has_dist {
        tables::read_triples(&conn, SourceTable::Distributions)?
            .into_iter()
            .map(DistributionRow::from)
            .collect()
    } else {
        Vec::new()
    };

    close(conn)?;

    Ok(Some(SourceTables {
        resources,
        multi_valued,
        distributions,
    }))
}
