//! Loose coercions applied to record fields.
//!
//! Records are schemaless, so a field may hold any JSON type. These helpers
//! never fail: values that cannot be interpreted collapse to zero (or to their
//! JSON text for tags).

use serde_json::{Map, Value};

/// Resolves a configured field name against a record. An exact top-level key
/// wins; otherwise the name is read as a dotted path through nested objects,
/// where numeric segments also index into arrays (`tags.host`, `points.0.v`).
pub(crate) fn lookup<'a>(record: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(name) {
        return Some(value);
    }
    let (head, rest) = name.split_once('.')?;
    rest.split('.')
        .try_fold(record.get(head)?, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Integer view of a timestamp field. Floats truncate toward zero, numeric
/// strings are parsed, `true` is 1 and anything else is 0.
pub(crate) fn timestamp_of(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => parse_int(s),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

/// Numeric view of a value field, with the same rules as [`timestamp_of`]
/// minus the truncation.
pub(crate) fn number_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_float(s).unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    }
}

/// String form used for group keys and tags. Numbers keep their input text.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_int(s: &str) -> i64 {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| parse_float(s).map(|f| f as i64))
        .unwrap_or(0)
}

fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}
