//! Table discovery and full-table reads.

use duckdb::types::Value;
use duckdb::Connection;
use log::debug;
use strum_macros::{AsRefStr, Display};

use super::models::Record;
use crate::error_handling::ExportError;

const TRIPLE_COLUMNS: usize = 3;

/// The tables the exporter knows about.
///
/// Only `resources` is required; the other two contribute nothing when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SourceTable {
    /// One row per catalog record, arbitrary scalar columns
    Resources,
    /// (resource id, field name, value) rows for multi-valued attributes
    ResourcesMv,
    /// (resource id, relation key, url) rows for external links
    Distributions,
}

/// Lists the tables of the current schema.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>, ExportError> {
    let mut stmt = conn.prepare("SHOW TABLES")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Tables present: {}", names.join(", "));
    Ok(names)
}

/// Returns true when `table` is among `names`.
pub fn has_table(names: &[String], table: SourceTable) -> bool {
    names.iter().any(|name| name == table.as_ref())
}

/// Column names of `table`, in declaration order.
pub fn column_names(conn: &Connection, table: SourceTable) -> Result<Vec<String>, ExportError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}

/// Reads every row of `table` as a schema-less [`Record`].
///
/// Whatever columns the table has are carried through; nothing is validated.
pub fn read_records(conn: &Connection, table: SourceTable) -> Result<Vec<Record>, ExportError> {
    let columns = column_names(conn, table)?;
    let mut stmt = conn.prepare(&format!("SELECT * FROM \"{table}\""))?;
    let mut rows = stmt.query([])?;

    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = Record::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            record.set(name.clone(), row.get::<_, Value>(idx)?);
        }
        records.push(record);
    }

    debug!("Read {} rows from {table}", records.len());
    Ok(records)
}

/// Reads every row of a three-column `table`, in scan order.
///
/// Tables with any other column count are rejected.
pub fn read_triples(conn: &Connection, table: SourceTable) -> Result<Vec<[Value; 3]>, ExportError> {
    let found = column_names(conn, table)?.len();
    if found != TRIPLE_COLUMNS {
        return Err(ExportError::TableShape {
            table: table.to_string(),
            expected: TRIPLE_COLUMNS,
            found,
        });
    }

    let mut stmt = conn.prepare(&format!("SELECT * FROM \"{table}\""))?;
    let triples = stmt
        .query_map([], |row| {
            Ok([
                row.get::<_, Value>(0)?,
                row.get::<_, Value>(1)?,
                row.get::<_, Value>(2)?,
            ])
        })?
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Read {} rows from {table}", triples.len());
    Ok(triples)
}
