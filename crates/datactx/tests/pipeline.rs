use datactx::{
    build_context, compose_user_turn, format_aggregation_table, group_and_aggregate,
    record_fields, relevant_collections, render_markdown_table, summarize_fields, AggregateOp,
    Collection, Dataset, FieldStat, QueryClassifier, Record, CONTEXT_HEADER, QUESTION_HEADER,
};
use serde_json::json;

fn collection(raw: serde_json::Value) -> Collection {
    raw.as_array()
        .unwrap()
        .iter()
        .map(|v| serde_json::from_value::<Record>(v.clone()).unwrap())
        .collect()
}

fn students() -> Collection {
    collection(json!([
        {"id": "s-1", "name": "Ana", "age": 20, "sex": "Female"},
        {"id": "s-2", "name": "Bo", "age": 24, "sex": "Male"},
        {"id": "s-3", "name": "Cai", "age": 22, "sex": "Female"}
    ]))
}

#[test]
fn test_summarizer_never_includes_id() {
    let recs = students();
    let fields = record_fields(&recs[0]);
    assert!(!fields.contains(&"id".to_string()));

    // Even an explicit id in the field list is refused.
    let stats = summarize_fields(&recs, &["id".to_string(), "age".to_string()]);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].0, "age");
}

#[test]
fn test_numeric_stats_over_numeric_subset() {
    let recs = students();
    let stats = summarize_fields(&recs, &["age".to_string()]);
    match &stats[0].1 {
        FieldStat::Numeric { avg, min, max } => {
            assert!((avg - 22.0).abs() < 1e-9);
            assert_eq!(*min, 20.0);
            assert_eq!(*max, 24.0);
        }
        other => panic!("expected numeric, got {other:?}"),
    }
}

#[test]
fn test_wide_categorical_has_no_breakdown() {
    let recs: Collection = (0..12)
        .map(|i| {
            serde_json::from_value::<Record>(json!({"code": format!("C{i}")})).unwrap()
        })
        .collect();
    let stats = summarize_fields(&recs, &["code".to_string()]);
    match &stats[0].1 {
        FieldStat::Categorical {
            unique_count,
            top_values,
        } => {
            assert_eq!(*unique_count, 12);
            assert!(top_values.is_empty());
        }
        other => panic!("expected categorical, got {other:?}"),
    }
}

#[test]
fn test_narrow_categorical_top_three_descending() {
    let recs = collection(json!([
        {"sex": "Female"}, {"sex": "Female"}, {"sex": "Female"},
        {"sex": "Male"}, {"sex": "Male"},
        {"sex": "Intersex"}, {"sex": "Unreported"}
    ]));
    let stats = summarize_fields(&recs, &["sex".to_string()]);
    match &stats[0].1 {
        FieldStat::Categorical {
            unique_count,
            top_values,
        } => {
            assert_eq!(*unique_count, 4);
            assert_eq!(top_values.len(), 3);
            assert_eq!(top_values[0], ("Female".to_string(), 3));
            assert_eq!(top_values[1], ("Male".to_string(), 2));
            assert!(top_values[0].1 >= top_values[1].1 && top_values[1].1 >= top_values[2].1);
        }
        other => panic!("expected categorical, got {other:?}"),
    }
}

#[test]
fn test_context_block_shape() {
    let mut dataset = Dataset::new();
    dataset.insert("students".to_string(), students());
    dataset.insert("alumni".to_string(), Vec::new());

    let ctx = build_context(&dataset);
    assert!(ctx.starts_with(CONTEXT_HEADER));
    assert!(ctx.contains("Collection: students"));
    assert!(ctx.contains("   Records: 3"));
    assert!(ctx.contains("age"));
    // Empty collection: count reported, no field section.
    assert!(ctx.contains("Collection: alumni"));
    assert!(ctx.contains("   Records: 0"));
    let after_alumni = ctx.split("Collection: alumni").nth(1).unwrap();
    let alumni_section = after_alumni.split("Collection:").next().unwrap();
    assert!(!alumni_section.contains("Fields:"));
}

#[test]
fn test_classifier_verdicts() {
    let c = QueryClassifier::default();
    assert!(c.is_data_query("how many students are enrolled"));
    assert!(!c.is_data_query("hello, how are you"));
}

#[test]
fn test_composer_enriches_data_queries() {
    let mut dataset = Dataset::new();
    dataset.insert("students".to_string(), students());

    let c = QueryClassifier::default();
    let question = "how many students are enrolled";
    let prompt = compose_user_turn(&c, &dataset, question);
    assert!(prompt.contains(CONTEXT_HEADER));
    assert!(prompt.contains(QUESTION_HEADER));
    assert!(prompt.contains(question));
}

#[test]
fn test_composer_passes_casual_turns_through() {
    let mut dataset = Dataset::new();
    dataset.insert("students".to_string(), students());

    let c = QueryClassifier::default();
    let message = "hello, how are you";
    assert_eq!(compose_user_turn(&c, &dataset, message), message);
}

#[test]
fn test_composer_skips_context_for_empty_dataset() {
    let mut dataset = Dataset::new();
    dataset.insert("students".to_string(), Vec::new());

    let c = QueryClassifier::default();
    let question = "how many students are enrolled";
    assert_eq!(compose_user_turn(&c, &dataset, question), question);
}

#[test]
fn test_relevant_collections_filtering() {
    let mut dataset = Dataset::new();
    dataset.insert("students".to_string(), students());
    dataset.insert("staff".to_string(), collection(json!([{"name": "Dr. Uy"}])));

    let narrowed = relevant_collections(&dataset, "compare the Staff by unit");
    assert_eq!(narrowed.len(), 1);
    assert!(narrowed.contains_key("staff"));

    // No collection named: everything stays relevant.
    let all = relevant_collections(&dataset, "show me a breakdown");
    assert_eq!(all.len(), 2);
}

#[test]
fn test_aggregate_avg_treats_missing_as_zero() {
    let recs = collection(json!([
        {"g": "A", "v": 2}, {"g": "A", "v": 4}, {"g": "B"}
    ]));
    let out = group_and_aggregate(&recs, "g", Some("v"), AggregateOp::Avg);
    assert_eq!(out["A"], 3.0);
    assert_eq!(out["B"], 0.0);
}

#[test]
fn test_aggregate_count_and_unknown_bucket() {
    let recs = collection(json!([
        {"g": "A"}, {"g": "A"}, {"v": 1}
    ]));
    let out = group_and_aggregate(&recs, "g", None, AggregateOp::Count);
    assert_eq!(out["A"], 2.0);
    assert_eq!(out["Unknown"], 1.0);
}

#[test]
fn test_aggregate_min_max_sentinels() {
    let recs = collection(json!([
        {"g": "A", "v": 5}, {"g": "A", "v": 3}, {"g": "B"}
    ]));
    let min = group_and_aggregate(&recs, "g", Some("v"), AggregateOp::Min);
    assert_eq!(min["A"], 3.0);
    assert!(min["B"].is_infinite() && min["B"] > 0.0);

    let max = group_and_aggregate(&recs, "g", Some("v"), AggregateOp::Max);
    assert_eq!(max["A"], 5.0);
    assert!(max["B"].is_infinite() && max["B"] < 0.0);
}

#[test]
fn test_aggregation_table_rounds_to_two_decimals() {
    let recs = collection(json!([
        {"g": "A", "v": 1}, {"g": "A", "v": 2}, {"g": "A", "v": 2}
    ]));
    let out = group_and_aggregate(&recs, "g", Some("v"), AggregateOp::Avg);
    let table = format_aggregation_table(&out, "Group", "Average");
    assert!(table.contains("| Group | Average |"));
    assert!(table.contains("| A | 1.67 |"));
}

#[test]
fn test_table_truncates_at_ten_rows_with_notice() {
    let recs: Collection = (0..15)
        .map(|i| serde_json::from_value::<Record>(json!({"n": i})).unwrap())
        .collect();
    let table = render_markdown_table(&recs, &["n".to_string()]);

    let data_rows = table
        .lines()
        .filter(|l| l.starts_with('|') && !l.contains("---") && !l.contains(" n "))
        .count();
    assert_eq!(data_rows, 10);
    assert!(table.contains("*Showing 10 of 15 records*"));
}

#[test]
fn test_table_renders_missing_cells_as_dash() {
    let recs = collection(json!([
        {"name": "Ana", "age": 20}, {"name": "Bo"}
    ]));
    let table = render_markdown_table(&recs, &["name".to_string(), "age".to_string()]);
    assert!(table.contains("| Bo | - |"));
    assert!(!table.contains("Showing"));
}
