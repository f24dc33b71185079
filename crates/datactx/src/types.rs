use serde_json::Value;
use std::collections::BTreeMap;

/// One document: field name to scalar or nested JSON value.
pub type Record = serde_json::Map<String, Value>;

/// Ordered sequence of records under one collection name.
pub type Collection = Vec<Record>;

/// All loaded collections, keyed by name. `BTreeMap` so that context
/// builds iterate in a stable order within one call.
pub type Dataset = BTreeMap<String, Collection>;

/// Synthetic document id, excluded from all statistical analysis.
pub const ID_FIELD: &str = "id";

/// Field names of a record with `id` filtered out. Schema is inferred from
/// a single record; callers pass the first record of a collection.
pub fn record_fields(record: &Record) -> Vec<String> {
    record
        .keys()
        .filter(|k| k.as_str() != ID_FIELD)
        .cloned()
        .collect()
}

/// Render a JSON value the way it should appear in tables and breakdowns.
/// Strings are unquoted; everything else uses its JSON text.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
