//! Per-record JSON documents.

use std::fs;
use std::path::{Path, PathBuf};

use duckdb::types::Value;
use serde_json::{Map, Value as JsonValue};

use super::value::{is_blank, text_form, to_json};
use crate::config::OUTPUT_EXTENSION;
use crate::error_handling::ExportError;
use crate::storage::Record;

/// Converts a merged record into a JSON object, dropping blank fields.
pub fn to_document(record: Record) -> Map<String, JsonValue> {
    record
        .into_fields()
        .into_iter()
        .filter(|(_, value)| !is_blank(value))
        .map(|(name, value)| (name, to_json(&value)))
        .collect()
}

/// Path of the document for the resource `id` inside `output_dir`.
pub fn document_path(output_dir: &Path, id: &Value) -> PathBuf {
    output_dir.join(format!("{}.{OUTPUT_EXTENSION}", text_form(id)))
}

/// Writes `record` as a 2-space indented JSON document, replacing any
/// existing file, and returns the path written.
pub fn write_document(output_dir: &Path, id: &Value, record: Record) -> Result<PathBuf, ExportError> {
    let path = document_path(output_dir, id);
    let body = serde_json::to_string_pretty(&JsonValue::Object(to_document(record)))?;
    fs::write(&path, body).map_err(|e| ExportError::io(&path, e))?;
    Ok(path)
}
