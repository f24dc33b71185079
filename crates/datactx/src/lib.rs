//! Data-context preparation for the GIA chat relay.
//!
//! Turns loosely-typed document collections into a bounded textual digest,
//! decides whether a user message is asking about the data, and merges the
//! two into the prompt forwarded to the completion model.

mod aggregate;
mod classify;
mod compose;
mod context;
mod stats;
mod transcript;
mod types;

pub use aggregate::{
    format_aggregation_table, group_and_aggregate, render_markdown_table, AggregateOp,
    MISSING_ADDEND, MISSING_MAX, MISSING_MIN, TABLE_ROW_LIMIT, UNKNOWN_GROUP,
};
pub use classify::{QueryClassifier, DEFAULT_DATA_KEYWORDS};
pub use compose::{compose_user_turn, relevant_collections, QUESTION_HEADER};
pub use context::{build_context, CONTEXT_HEADER};
pub use stats::{summarize_fields, FieldStat, CATEGORICAL_BREAKDOWN_LIMIT, TOP_VALUES_LIMIT};
pub use transcript::{Role, Transcript, Turn, PENDING_PLACEHOLDER};
pub use types::{record_fields, value_to_text, Collection, Dataset, Record, ID_FIELD};
