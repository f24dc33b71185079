use crate::classify::QueryClassifier;
use crate::context::build_context;
use crate::types::Dataset;

/// Labeled section separating the dataset digest from the literal question.
pub const QUESTION_HEADER: &str = "=== USER QUESTION ===";

const FORMATTING_INSTRUCTION: &str = "Please analyze the data above and answer the user's \
question. Use tables, lists, and proper markdown formatting in your response.";

/// Produce the outbound "user" turn. Data queries against a non-empty
/// dataset get the context block, then the question under its own header,
/// then a formatting instruction for the downstream model. Everything else
/// passes through byte-for-byte so casual turns stay lean.
pub fn compose_user_turn(
    classifier: &QueryClassifier,
    dataset: &Dataset,
    message: &str,
) -> String {
    let has_data = dataset.values().any(|c| !c.is_empty());
    if !has_data || !classifier.is_data_query(message) {
        return message.to_string();
    }

    let context = build_context(dataset);
    format!("{context}\n{QUESTION_HEADER}\n{message}\n\n{FORMATTING_INSTRUCTION}")
}

/// Narrow the dataset to the collections named in the message. When no
/// collection name appears, everything is relevant.
pub fn relevant_collections(dataset: &Dataset, message: &str) -> Dataset {
    let lower = message.to_lowercase();
    let named: Dataset = dataset
        .iter()
        .filter(|(name, _)| lower.contains(&name.to_lowercase()))
        .map(|(name, records)| (name.clone(), records.clone()))
        .collect();

    if named.is_empty() {
        dataset.clone()
    } else {
        named
    }
}
