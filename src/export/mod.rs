//! Export functionality for catalog records.
//!
//! This module reads the catalog database, merges multi-valued fields and
//! distribution references into each resource, and writes one Aardvark JSON
//! document per resource.

mod document;
mod json;
mod merge;
mod types;
mod value;

pub use document::{document_path, to_document};
pub use json::export_json;
pub use merge::{references_json, DistributionIndex, MultiValuedIndex};
pub use types::{ExportOptions, ExportOutcome, ExportReport};
pub use value::{is_blank, is_truthy, to_json};
