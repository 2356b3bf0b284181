//! Joining side-table rows onto resources.
//!
//! Side tables are grouped by resource id once, then each resource record is
//! overlaid with its multi-valued fields and its distribution references.

use std::collections::HashMap;

use duckdb::types::Value;
use serde_json::{Map, Value as JsonValue};

use super::value::{id_key, text_form, to_json};
use crate::config::REFERENCES_FIELD;
use crate::storage::{DistributionRow, MultiValuedRow, Record};

/// Multi-valued fields grouped by resource, then by field name.
///
/// Field names keep the order of their first row; values keep scan order.
#[derive(Debug, Default)]
pub struct MultiValuedIndex {
    by_resource: HashMap<String, Vec<(String, Vec<Value>)>>,
}

impl MultiValuedIndex {
    /// Groups `resources_mv` rows.
    pub fn from_rows(rows: Vec<MultiValuedRow>) -> Self {
        let mut by_resource: HashMap<String, Vec<(String, Vec<Value>)>> = HashMap::new();
        for row in rows {
            let fields = by_resource.entry(id_key(&row.resource_id)).or_default();
            let name = text_form(&row.field);
            match fields.iter_mut().find(|(field, _)| *field == name) {
                Some((_, values)) => values.push(row.value),
                None => fields.push((name, vec![row.value])),
            }
        }
        MultiValuedIndex { by_resource }
    }

    /// Grouped fields of the resource `id`; empty when it has none.
    pub fn fields_for(&self, id: &Value) -> &[(String, Vec<Value>)] {
        self.by_resource
            .get(&id_key(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Distribution `(relation key, url)` pairs grouped by resource, in scan order.
#[derive(Debug, Default)]
pub struct DistributionIndex {
    by_resource: HashMap<String, Vec<(Value, Value)>>,
}

impl DistributionIndex {
    /// Groups `distributions` rows.
    pub fn from_rows(rows: Vec<DistributionRow>) -> Self {
        let mut by_resource: HashMap<String, Vec<(Value, Value)>> = HashMap::new();
        for row in rows {
            by_resource
                .entry(id_key(&row.resource_id))
                .or_default()
                .push((row.relation_key, row.url));
        }
        DistributionIndex { by_resource }
    }

    /// The `dct_references_s` string for `id`, or `None` without distributions.
    pub fn references_for(&self, id: &Value) -> Option<String> {
        self.by_resource
            .get(&id_key(id))
            .filter(|pairs| !pairs.is_empty())
            .map(|pairs| references_json(pairs))
    }
}

/// Builds the stringified references object.
///
/// A repeated relation key keeps its first position but takes the later url.
/// Every space character is removed from the encoded string, including
/// spaces inside urls.
pub fn references_json(pairs: &[(Value, Value)]) -> String {
    let mut references = Map::new();
    for (relation_key, url) in pairs {
        references.insert(text_form(relation_key), to_json(url));
    }
    JsonValue::Object(references).to_string().replace(' ', "")
}

/// Overlays the side-table data for `id` onto `record`.
pub fn merge_record(
    record: &mut Record,
    id: &Value,
    multi_valued: &MultiValuedIndex,
    distributions: &DistributionIndex,
) {
    for (field, values) in multi_valued.fields_for(id) {
        record.set(field.clone(), Value::List(values.clone()));
    }

    if let Some(references) = distributions.references_for(id) {
        record.set(REFERENCES_FIELD, Value::Text(references));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn mv(id: &str, field: &str, value: &str) -> MultiValuedRow {
        MultiValuedRow::from([text(id), text(field), text(value)])
    }

    fn dist(id: &str, key: &str, url: &str) -> DistributionRow {
        DistributionRow::from([text(id), text(key), text(url)])
    }

    #[test]
    fn test_multi_valued_grouping_keeps_scan_order() {
        let index = MultiValuedIndex::from_rows(vec![
            mv("r1", "keyword", "b"),
            mv("r2", "keyword", "x"),
            mv("r1", "subject", "s"),
            mv("r1", "keyword", "a"),
        ]);

        let fields = index.fields_for(&text("r1"));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "keyword");
        assert_eq!(to_json(&Value::List(fields[0].1.clone())), serde_json::json!(["b", "a"]));
        assert_eq!(fields[1].0, "subject");
        assert!(index.fields_for(&text("r3")).is_empty());
    }

    #[test]
    fn test_references_later_row_wins() {
        let index = DistributionIndex::from_rows(vec![
            dist("r1", "download", "http://x/old"),
            dist("r1", "preview", "http://x/p"),
            dist("r1", "download", "http://x/new"),
        ]);

        assert_eq!(
            index.references_for(&text("r1")).as_deref(),
            Some(r#"{"download":"http://x/new","preview":"http://x/p"}"#)
        );
        assert!(index.references_for(&text("r2")).is_none());
    }

    #[test]
    fn test_references_strip_spaces_everywhere() {
        let pairs = vec![(text("web page"), text("http://x/a b"))];
        assert_eq!(references_json(&pairs), r#"{"webpage":"http://x/ab"}"#);
    }

    #[test]
    fn test_references_null_url() {
        let pairs = vec![(text("download"), Value::Null)];
        assert_eq!(references_json(&pairs), r#"{"download":null}"#);
    }

    #[test]
    fn test_merge_record_overwrites_scalar_in_place() {
        let mut record: Record = vec![
            ("id".to_string(), text("r1")),
            ("keyword".to_string(), text("scalar")),
            ("title".to_string(), text("Test")),
        ]
        .into_iter()
        .collect();
        let multi_valued = MultiValuedIndex::from_rows(vec![mv("r1", "keyword", "a")]);
        let distributions = DistributionIndex::from_rows(vec![dist("r1", "download", "http://x/y")]);

        merge_record(&mut record, &text("r1"), &multi_valued, &distributions);

        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "keyword", "title", "dct_references_s"]);
        assert!(matches!(record.get("keyword"), Some(Value::List(items)) if items.len() == 1));
        assert!(matches!(
            record.get(REFERENCES_FIELD),
            Some(Value::Text(refs)) if refs == r#"{"download":"http://x/y"}"#
        ));
    }

    #[test]
    fn test_ids_match_by_type() {
        let index = MultiValuedIndex::from_rows(vec![MultiValuedRow::from([
            Value::Int(1),
            text("keyword"),
            text("a"),
        ])]);
        assert_eq!(index.fields_for(&Value::Int(1)).len(), 1);
        assert!(index.fields_for(&text("1")).is_empty());
    }
}
