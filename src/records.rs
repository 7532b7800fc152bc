// Translation records - the data bound to each row
//
// Records arrive from outside (a JSON file or the bundled demo set) and are
// never mutated by the UI. Missing fields deserialize to empty strings so a
// sparse record still renders instead of failing the whole file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One translation: destination language, translated text, original text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationRecord {
    /// Display name of the destination language
    pub target: String,
    /// Translated text
    pub translation: String,
    /// Original text (`sourceText` on the wire)
    pub source_text: String,
}

impl TranslationRecord {
    pub fn new(
        target: impl Into<String>,
        translation: impl Into<String>,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            translation: translation.into(),
            source_text: source_text.into(),
        }
    }
}

/// Parse a JSON array of records
pub fn parse_records(json: &str) -> Result<Vec<TranslationRecord>> {
    serde_json::from_str(json).context("Records must be a JSON array of objects")
}

/// Load records from a JSON file
pub fn load_records(path: &Path) -> Result<Vec<TranslationRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file {}", path.display()))?;
    let records = parse_records(&contents)
        .with_context(|| format!("Failed to parse records file {}", path.display()))?;

    tracing::info!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_source_text() {
        let records =
            parse_records(r#"[{"target":"French","translation":"Bonjour","sourceText":"Hello"}]"#)
                .unwrap();

        assert_eq!(
            records,
            vec![TranslationRecord::new("French", "Bonjour", "Hello")]
        );
    }

    #[test]
    fn missing_fields_become_empty() {
        let records = parse_records(r#"[{"target":"German"}]"#).unwrap();

        assert_eq!(records[0].target, "German");
        assert_eq!(records[0].translation, "");
        assert_eq!(records[0].source_text, "");
    }

    #[test]
    fn rejects_non_array() {
        assert!(parse_records(r#"{"target":"French"}"#).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_records(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read records file"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "translate-mate-records-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[{"target":"Spanish","translation":"Hola","sourceText":"Hi"}]"#,
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].translation, "Hola");
    }
}
