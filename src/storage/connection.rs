//! Database connection management.
//!
//! The exporter only ever reads, so the catalog database is opened in
//! read-only mode and released as soon as the tables are materialized.

use std::path::Path;

use duckdb::{AccessMode, Config, Connection};
use log::{debug, error};

use crate::error_handling::ExportError;

/// Opens the DuckDB database at `db_path` in read-only mode.
///
/// The caller is expected to check that the file exists first; DuckDB
/// refuses to create a database in read-only mode and reports that as an
/// error.
pub fn open_read_only(db_path: &Path) -> Result<Connection, ExportError> {
    let config = Config::default().access_mode(AccessMode::ReadOnly)?;
    let conn = Connection::open_with_flags(db_path, config).map_err(|e| {
        error!("Failed to open database {}: {e}", db_path.display());
        ExportError::Database(e)
    })?;
    debug!("Opened {} read-only", db_path.display());
    Ok(conn)
}

/// Closes the connection, surfacing any error DuckDB reports on shutdown.
pub fn close(conn: Connection) -> Result<(), ExportError> {
    conn.close().map_err(|(_, e)| ExportError::Database(e))?;
    debug!("Database connection closed");
    Ok(())
}
