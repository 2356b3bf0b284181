// Shared test helpers for building catalog databases on disk.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use duckdb::Connection;
use serde_json::Value;
use tempfile::TempDir;

/// Schema and rows matching the single-record example catalog.
#[allow(dead_code)] // Used by other test files
pub const EXAMPLE_CATALOG: &str = "
    CREATE TABLE resources (id VARCHAR, title VARCHAR, empty_field VARCHAR);
    INSERT INTO resources VALUES ('r1', 'Test', '');
    CREATE TABLE resources_mv (resource_id VARCHAR, field VARCHAR, val VARCHAR);
    INSERT INTO resources_mv VALUES ('r1', 'keyword', 'a'), ('r1', 'keyword', 'b');
    CREATE TABLE distributions (resource_id VARCHAR, relation_key VARCHAR, url VARCHAR);
    INSERT INTO distributions VALUES ('r1', 'download', 'http://x/y');
";

/// Creates a DuckDB file at `db_path` by running `sql`.
///
/// The connection is closed before returning so the exporter can open the
/// file read-only afterwards.
pub fn create_test_db(db_path: &Path, sql: &str) {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    let conn = Connection::open(db_path).expect("Failed to create test database");
    conn.execute_batch(sql).expect("Failed to populate test database");
    conn.close().map_err(|(_, e)| e).expect("Failed to close test database");
}

/// Creates a temp dir holding `catalog.duckdb` built from `sql`.
///
/// Returns the temp dir (keep it alive), the database path and an output
/// directory path that does not exist yet.
#[allow(dead_code)] // Used by other test files
pub fn create_test_catalog(sql: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("catalog.duckdb");
    let output_dir = temp_dir.path().join("metadata");
    create_test_db(&db_path, sql);
    (temp_dir, db_path, output_dir)
}

/// Reads and parses one exported document.
#[allow(dead_code)] // Used by other test files
pub fn read_document(output_dir: &Path, id: &str) -> Value {
    let path = output_dir.join(format!("{id}.json"));
    let body = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&body).expect("Exported document is not valid JSON")
}

/// Sorted file names inside `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn list_documents(output_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(output_dir)
        .expect("Failed to read output directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
