use crate::types::{value_to_text, Collection, ID_FIELD};
use serde::Serialize;
use serde_json::Value;

/// Above this many distinct values a categorical field gets no frequency
/// breakdown, only its unique count. Keeps the context block bounded no
/// matter how wide the field's domain is.
pub const CATEGORICAL_BREAKDOWN_LIMIT: usize = 10;

/// Most-common values shown per categorical field.
pub const TOP_VALUES_LIMIT: usize = 3;

/// Descriptive statistics for one field of one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldStat {
    Numeric {
        avg: f64,
        min: f64,
        max: f64,
    },
    /// `top_values` is empty when the field exceeds
    /// [`CATEGORICAL_BREAKDOWN_LIMIT`] distinct values.
    Categorical {
        unique_count: usize,
        top_values: Vec<(String, usize)>,
    },
}

/// Summarize the given fields over a collection. Fields absent from a
/// record (or null) count as missing and are excluded from that field's
/// value set; a field with no observed values yields no entry at all.
///
/// A field is numeric when more than half of its observed values are
/// numbers; the numeric stats then cover the numeric subset only. `id`
/// is never summarized even if passed in.
pub fn summarize_fields(records: &Collection, fields: &[String]) -> Vec<(String, FieldStat)> {
    let mut out = Vec::new();

    for field in fields {
        if field == ID_FIELD {
            continue;
        }
        let values: Vec<&Value> = records
            .iter()
            .filter_map(|r| r.get(field))
            .filter(|v| !v.is_null())
            .collect();
        if values.is_empty() {
            continue;
        }

        let numeric: Vec<f64> = values.iter().filter_map(|v| v.as_f64()).collect();
        if numeric.len() * 2 > values.len() {
            let avg = numeric.iter().sum::<f64>() / numeric.len() as f64;
            let min = numeric.iter().copied().fold(f64::INFINITY, f64::min);
            let max = numeric.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            out.push((field.clone(), FieldStat::Numeric { avg, min, max }));
        } else {
            out.push((field.clone(), categorical_stat(&values)));
        }
    }

    out
}

fn categorical_stat(values: &[&Value]) -> FieldStat {
    // Counts keyed in first-encounter order so that the stable sort below
    // breaks frequency ties the way the data arrived.
    let mut counts: Vec<(String, usize)> = Vec::new();
    for v in values {
        let text = value_to_text(v);
        match counts.iter().position(|(k, _)| *k == text) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((text, 1)),
        }
    }

    let unique_count = counts.len();
    let top_values = if unique_count <= CATEGORICAL_BREAKDOWN_LIMIT {
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(TOP_VALUES_LIMIT);
        counts
    } else {
        Vec::new()
    };

    FieldStat::Categorical {
        unique_count,
        top_values,
    }
}
