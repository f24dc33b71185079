/// Default data-intent vocabulary. Any single case-insensitive substring
/// match classifies a message as a data query. This is a heuristic: casual
/// messages containing an incidental keyword will match, and data questions
/// phrased without any of these will not.
pub const DEFAULT_DATA_KEYWORDS: &[&str] = &[
    "analyze",
    "analysis",
    "count",
    "how many",
    "total",
    "sum",
    "average",
    "mean",
    "minimum",
    "maximum",
    "statistics",
    "breakdown",
    "compare",
    "comparison",
    "trend",
    "distribution",
    "percentage",
    "ratio",
    "demographic",
    "students",
    "staff",
    "faculty",
    "records",
    "enrolled",
    "dataset",
];

/// Decides whether a free-text message is asking about the dataset. The
/// keyword set is data, not code: pass a custom set to tune precision and
/// recall without touching the logic.
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    keywords: Vec<String>,
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_KEYWORDS.iter().map(|k| k.to_string()))
    }
}

impl QueryClassifier {
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn is_data_query(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}
