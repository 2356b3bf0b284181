//! Cell-level helpers: emptiness, truthiness and JSON conversion of DuckDB values.

use chrono::{DateTime, NaiveDate, NaiveTime};
use duckdb::types::{TimeUnit, Value};
use serde_json::{Number, Value as JsonValue};

/// Days between 0001-01-01 and 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Returns true for values that are omitted from an output document:
/// NULL, NaN, and the empty string.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Float(f) => f.is_nan(),
        Value::Double(f) => f.is_nan(),
        Value::Text(s) => s.is_empty(),
        _ => false,
    }
}

/// Returns false for identifiers that cannot name a record: NULL, false,
/// zero, and empty text, blobs or lists. NaN counts as truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Boolean(b) => *b,
        Value::TinyInt(n) => *n != 0,
        Value::SmallInt(n) => *n != 0,
        Value::Int(n) => *n != 0,
        Value::BigInt(n) => *n != 0,
        Value::HugeInt(n) => *n != 0,
        Value::UTinyInt(n) => *n != 0,
        Value::USmallInt(n) => *n != 0,
        Value::UInt(n) => *n != 0,
        Value::UBigInt(n) => *n != 0,
        Value::Float(f) => *f != 0.0,
        Value::Double(f) => *f != 0.0,
        Value::Decimal(d) => !d.is_zero(),
        Value::Text(s) | Value::Enum(s) => !s.is_empty(),
        Value::Blob(bytes) => !bytes.is_empty(),
        Value::List(items) | Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Converts a DuckDB value into its JSON representation.
///
/// Non-finite floats become `null`, matching how `serde_json` serializes them.
/// Temporal values are rendered as ISO 8601 strings.
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::TinyInt(n) => JsonValue::from(*n),
        Value::SmallInt(n) => JsonValue::from(*n),
        Value::Int(n) => JsonValue::from(*n),
        Value::BigInt(n) => JsonValue::from(*n),
        Value::HugeInt(n) => i64::try_from(*n)
            .map(JsonValue::from)
            .unwrap_or_else(|_| JsonValue::String(n.to_string())),
        Value::UTinyInt(n) => JsonValue::from(*n),
        Value::USmallInt(n) => JsonValue::from(*n),
        Value::UInt(n) => JsonValue::from(*n),
        Value::UBigInt(n) => JsonValue::from(*n),
        Value::Float(f) => float_to_json(f64::from(*f)),
        Value::Double(f) => float_to_json(*f),
        Value::Decimal(d) => decimal_to_json(&d.to_string()),
        Value::Text(s) | Value::Enum(s) => JsonValue::String(s.clone()),
        Value::Blob(bytes) => JsonValue::String(hex(bytes)),
        Value::Date32(days) => JsonValue::String(date_string(*days)),
        Value::Timestamp(unit, raw) => JsonValue::String(timestamp_string(unit, *raw)),
        Value::Time64(unit, raw) => JsonValue::String(time_string(unit, *raw)),
        Value::List(items) | Value::Array(items) => {
            JsonValue::Array(items.iter().map(to_json).collect())
        }
        Value::Struct(fields) => JsonValue::Object(
            fields
                .iter()
                .map(|(name, field)| (name.clone(), to_json(field)))
                .collect(),
        ),
        Value::Map(entries) => JsonValue::Object(
            entries
                .iter()
                .map(|(key, entry)| (text_form(key), to_json(entry)))
                .collect(),
        ),
        Value::Interval {
            months,
            days,
            nanos,
        } => JsonValue::String(interval_string(*months, *days, *nanos)),
        Value::Union(inner) => to_json(inner),
        other => JsonValue::String(format!("{other:?}")),
    }
}

/// Text form of a value, as used for file names and object keys.
///
/// Strings are taken verbatim, non-finite floats are spelled `nan`, `inf`
/// and `-inf`; everything else uses its JSON text.
pub fn text_form(value: &Value) -> String {
    match value {
        Value::Text(s) | Value::Enum(s) => s.clone(),
        Value::Float(f) if !f.is_finite() => non_finite_text(f64::from(*f)),
        Value::Double(f) if !f.is_finite() => non_finite_text(*f),
        other => to_json(other).to_string(),
    }
}

/// Key used to join side-table rows to resources.
///
/// Distinguishes types, so text `"1"` and integer `1` never match.
pub fn id_key(value: &Value) -> String {
    to_json(value).to_string()
}

fn float_to_json(f: f64) -> JsonValue {
    Number::from_f64(f)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn non_finite_text(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

fn decimal_to_json(text: &str) -> JsonValue {
    if let Ok(n) = text.parse::<i64>() {
        return JsonValue::from(n);
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(JsonValue::Number)
        .unwrap_or_else(|| JsonValue::String(text.to_string()))
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// ISO 8601 duration, e.g. `P1M2DT3.5S`; a zero interval is `PT0S`.
fn interval_string(months: i32, days: i32, nanos: i64) -> String {
    let mut out = String::from("P");
    if months != 0 {
        out.push_str(&format!("{months}M"));
    }
    if days != 0 {
        out.push_str(&format!("{days}D"));
    }
    if nanos != 0 {
        let sign = if nanos < 0 { "-" } else { "" };
        let abs = nanos.unsigned_abs();
        let secs = abs / 1_000_000_000;
        let frac = abs % 1_000_000_000;
        if frac == 0 {
            out.push_str(&format!("T{sign}{secs}S"));
        } else {
            let frac = format!("{frac:09}");
            out.push_str(&format!("T{sign}{secs}.{}S", frac.trim_end_matches('0')));
        }
    }
    if out.len() == 1 {
        out.push_str("T0S");
    }
    out
}

fn to_micros(unit: &TimeUnit, raw: i64) -> i64 {
    match unit {
        TimeUnit::Second => raw.saturating_mul(MICROS_PER_SECOND),
        TimeUnit::Millisecond => raw.saturating_mul(1_000),
        TimeUnit::Microsecond => raw,
        TimeUnit::Nanosecond => raw / 1_000,
    }
}

fn date_string(days: i32) -> String {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| days.to_string())
}

fn timestamp_string(unit: &TimeUnit, raw: i64) -> String {
    DateTime::from_timestamp_micros(to_micros(unit, raw))
        .map(|ts| ts.naive_utc().format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn time_string(unit: &TimeUnit, raw: i64) -> String {
    let micros = to_micros(unit, raw);
    let secs = u32::try_from(micros.div_euclid(MICROS_PER_SECOND)).ok();
    let nanos = u32::try_from(micros.rem_euclid(MICROS_PER_SECOND) * 1_000).ok();
    secs.zip(nanos)
        .and_then(|(secs, nanos)| NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos))
        .map(|time| time.format("%H:%M:%S%.f").to_string())
        .unwrap_or_else(|| raw.to_string())
}
