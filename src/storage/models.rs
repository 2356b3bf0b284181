//! In-memory shapes of the rows read from the catalog database.

use duckdb::types::Value;

/// One schema-less row: every column of the source table, in column order.
///
/// Setting an existing field replaces its value in place, so the position of
/// a column survives being overwritten by a merged value.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Record {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns the value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Sets `name` to `value`, replacing in place or appending a new field.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Iterates over `(name, value)` pairs in field order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the record, yielding its fields in order.
    pub fn into_fields(self) -> Vec<(String, Value)> {
        self.fields
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Record::default();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

/// One element of a multi-valued attribute (`resources_mv`).
#[derive(Debug, Clone)]
pub struct MultiValuedRow {
    pub resource_id: Value,
    pub field: Value,
    pub value: Value,
}

impl From<[Value; 3]> for MultiValuedRow {
    fn from([resource_id, field, value]: [Value; 3]) -> Self {
        MultiValuedRow {
            resource_id,
            field,
            value,
        }
    }
}

/// One named external link of a resource (`distributions`).
#[derive(Debug, Clone)]
pub struct DistributionRow {
    pub resource_id: Value,
    pub relation_key: Value,
    pub url: Value,
}

impl From<[Value; 3]> for DistributionRow {
    fn from([resource_id, relation_key, url]: [Value; 3]) -> Self {
        DistributionRow {
            resource_id,
            relation_key,
            url,
        }
    }
}

/// Everything the exporter needs, fully materialized before any file is written.
#[derive(Debug, Default)]
pub struct SourceTables {
    /// Rows of `resources`, in scan order
    pub resources: Vec<Record>,
    /// Rows of `resources_mv`, empty when the table is absent
    pub multi_valued: Vec<MultiValuedRow>,
    /// Rows of `distributions`, empty when the table is absent
    pub distributions: Vec<DistributionRow>,
}
