//! Configuration constants.
//!
//! Default paths and the field names the exporter treats specially.

/// Database read when no path is given on the command line.
pub const DEFAULT_DB_PATH: &str = "web/public/records.duckdb";

/// Directory the per-record JSON files are written to by default.
pub const DEFAULT_OUTPUT_DIR: &str = "metadata";

/// Column holding the record identifier in the `resources` table.
pub const ID_FIELD: &str = "id";

/// Aardvark field carrying the stringified distribution references.
pub const REFERENCES_FIELD: &str = "dct_references_s";

/// Extension of the files written to the output directory.
pub const OUTPUT_EXTENSION: &str = "json";
