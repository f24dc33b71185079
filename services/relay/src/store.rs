use anyhow::{Context, Result};
use datactx::{Collection, Dataset, Record, ID_FIELD};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Load every `<collection>.json` file under `dir` into a fresh dataset.
/// Each file holds a JSON array of documents; documents without an `id`
/// get a synthetic one derived from their collection and position.
pub async fn load_dataset(dir: &Path) -> Result<Dataset> {
    let mut dataset = Dataset::new();

    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read data dir {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .context("Failed to walk data dir")?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let name = name.to_string();

        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let docs: Vec<Value> = serde_json::from_slice(&bytes)
            .with_context(|| format!("{} is not a JSON array of documents", path.display()))?;

        let records: Collection = docs
            .into_iter()
            .enumerate()
            .map(|(i, doc)| to_record(&name, i, doc))
            .collect();

        info!(collection = %name, records = records.len(), "loaded collection");
        dataset.insert(name, records);
    }

    Ok(dataset)
}

fn to_record(collection: &str, index: usize, doc: Value) -> Record {
    let mut record = match doc {
        Value::Object(map) => map,
        // Non-object documents are wrapped so the pipeline still sees a record.
        other => {
            let mut map = Record::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    if !record.contains_key(ID_FIELD) {
        record.insert(
            ID_FIELD.to_string(),
            Value::String(format!("{collection}-{index}")),
        );
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_data_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("gia-store-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_load_injects_synthetic_ids() {
        let dir = temp_data_dir();
        std::fs::write(
            dir.join("students.json"),
            r#"[{"name": "Ana"}, {"id": "keep-me", "name": "Bo"}]"#,
        )
        .unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let dataset = load_dataset(&dir).await.unwrap();
        assert_eq!(dataset.len(), 1);

        let students = &dataset["students"];
        assert_eq!(students[0][ID_FIELD], "students-0");
        assert_eq!(students[1][ID_FIELD], "keep-me");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = temp_data_dir();
        std::fs::write(dir.join("broken.json"), "{not json").unwrap();

        assert!(load_dataset(&dir).await.is_err());

        std::fs::remove_dir_all(&dir).ok();
    }
}
