use crate::stats::{summarize_fields, FieldStat};
use crate::types::{record_fields, Dataset};
use std::fmt::Write as _;

/// Opening line of every context block.
pub const CONTEXT_HEADER: &str = "=== DATABASE OVERVIEW ===";

/// Render the dataset digest injected ahead of data questions: one section
/// per collection with its record count, field list (inferred from the
/// first record) and per-field statistics. Empty collections report their
/// count only, since there is no record to infer fields from.
pub fn build_context(dataset: &Dataset) -> String {
    let mut ctx = format!("{CONTEXT_HEADER}\n\n");

    for (name, records) in dataset {
        let _ = writeln!(ctx, "Collection: {name}");
        let _ = writeln!(ctx, "   Records: {}", records.len());

        if let Some(first) = records.first() {
            let fields = record_fields(first);
            let _ = writeln!(ctx, "   Fields: {}", fields.join(", "));

            for (field, stat) in summarize_fields(records, &fields) {
                match stat {
                    FieldStat::Numeric { avg, min, max } => {
                        let _ = writeln!(ctx, "   • {field}: avg={avg:.2}, min={min}, max={max}");
                    }
                    FieldStat::Categorical {
                        unique_count,
                        top_values,
                    } => {
                        let _ = writeln!(ctx, "   • {field}: {unique_count} unique values");
                        if !top_values.is_empty() {
                            let top = top_values
                                .iter()
                                .map(|(v, n)| format!("{v}({n})"))
                                .collect::<Vec<_>>()
                                .join(", ");
                            let _ = writeln!(ctx, "     Top: {top}");
                        }
                    }
                }
            }
            ctx.push('\n');
        }
    }

    ctx
}
