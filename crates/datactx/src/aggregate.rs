use crate::types::{value_to_text, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Bucket for records missing the group-by field.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Missing aggregate values contribute this to sums and averages.
pub const MISSING_ADDEND: f64 = 0.0;

/// Missing aggregate values stand in as +∞ for min, so a group with no
/// observed value yields a non-finite result. Callers must guard with
/// `is_finite` before formatting.
pub const MISSING_MIN: f64 = f64::INFINITY;

/// Missing aggregate values stand in as −∞ for max; same caveat as
/// [`MISSING_MIN`].
pub const MISSING_MAX: f64 = f64::NEG_INFINITY;

/// Raw-record tables never render more than this many rows.
pub const TABLE_ROW_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

/// Group records by one field and reduce another. `aggregate_field` is
/// ignored for counts. Averages divide by the full group size, so records
/// missing the aggregate field pull the average toward zero rather than
/// being dropped.
pub fn group_and_aggregate(
    records: &[Record],
    group_by: &str,
    aggregate_field: Option<&str>,
    op: AggregateOp,
) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
    for record in records {
        let key = match record.get(group_by).filter(|v| !v.is_null()) {
            Some(v) => value_to_text(v),
            None => UNKNOWN_GROUP.to_string(),
        };
        groups.entry(key).or_default().push(record);
    }

    let numeric = |record: &Record| -> Option<f64> {
        aggregate_field
            .and_then(|f| record.get(f))
            .and_then(Value::as_f64)
    };

    let mut results = BTreeMap::new();
    for (key, group) in groups {
        let value = match op {
            AggregateOp::Count => group.len() as f64,
            AggregateOp::Sum => group
                .iter()
                .copied()
                .map(|r| numeric(r).unwrap_or(MISSING_ADDEND))
                .sum(),
            AggregateOp::Avg => {
                let sum: f64 = group
                    .iter()
                    .copied()
                    .map(|r| numeric(r).unwrap_or(MISSING_ADDEND))
                    .sum();
                sum / group.len() as f64
            }
            AggregateOp::Min => group
                .iter()
                .copied()
                .map(|r| numeric(r).unwrap_or(MISSING_MIN))
                .fold(f64::INFINITY, f64::min),
            AggregateOp::Max => group
                .iter()
                .copied()
                .map(|r| numeric(r).unwrap_or(MISSING_MAX))
                .fold(f64::NEG_INFINITY, f64::max),
        };
        results.insert(key, value);
    }

    results
}

/// Two-column markdown table over aggregation results, values rounded to
/// two decimals.
pub fn format_aggregation_table(
    results: &BTreeMap<String, f64>,
    key_label: &str,
    value_label: &str,
) -> String {
    let mut table = format!("| {key_label} | {value_label} |\n|---|---|\n");
    for (key, value) in results {
        let _ = writeln!(table, "| {key} | {value:.2} |");
    }
    table
}

/// Markdown table over raw records, truncated to [`TABLE_ROW_LIMIT`] rows
/// with a notice citing the true total. Missing and null cells render as
/// `-`; nested values render as JSON text.
pub fn render_markdown_table(records: &[Record], fields: &[String]) -> String {
    if records.is_empty() || fields.is_empty() {
        return String::new();
    }

    let mut table = format!("| {} |\n", fields.join(" | "));
    let _ = writeln!(
        table,
        "| {} |",
        fields.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
    );

    for record in records.iter().take(TABLE_ROW_LIMIT) {
        let cells: Vec<String> = fields
            .iter()
            .map(|f| match record.get(f) {
                None | Some(Value::Null) => "-".to_string(),
                Some(v) => value_to_text(v),
            })
            .collect();
        let _ = writeln!(table, "| {} |", cells.join(" | "));
    }

    if records.len() > TABLE_ROW_LIMIT {
        let _ = write!(
            table,
            "\n*Showing {TABLE_ROW_LIMIT} of {} records*\n",
            records.len()
        );
    }

    table
}
