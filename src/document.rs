//! Ceremony Document Loading
//!
//! Reads a JSON object of `key -> [id, description, ..]` arrays and validates
//! every entry into a `CeremonyEntry` before anything is emitted.
//!
//! Entry order is the order keys appear in the file. The map is parsed into an
//! `IndexMap`, so a key repeated in the source keeps the position of its first
//! occurrence and the value of its last.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde_json::Value;

use crate::error::{CodegenError, Result};

/// One validated ceremony entry
#[derive(Debug, Clone, PartialEq)]
pub struct CeremonyEntry {
    /// Key as written in the source document
    pub key: String,

    /// Element 0 of the source array
    pub id: Value,

    /// Element 1 of the source array, the text that ends up in the generated line
    pub description: Value,
}

impl CeremonyEntry {
    /// Validate a raw `(key, value)` pair
    ///
    /// The value must be an array with at least two elements; anything past
    /// index 1 is ignored.
    pub fn from_value(key: String, value: Value) -> Result<Self> {
        let found = describe(&value);

        match EntryFields::deserialize(value) {
            Ok(EntryFields(id, description)) => Ok(Self { key, id, description }),
            Err(_) => Err(CodegenError::Shape { key, found }),
        }
    }

    /// Description as it appears between the quotes of a generated line
    ///
    /// Strings are used verbatim (no JSON escaping), other values as compact JSON.
    pub fn description_text(&self) -> Cow<'_, str> {
        match &self.description {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// `[id, description, ..]` array shape; trailing elements are skipped
struct EntryFields(Value, Value);

impl<'de> Deserialize<'de> for EntryFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntryFieldsVisitor;

        impl<'de> Visitor<'de> for EntryFieldsVisitor {
            type Value = EntryFields;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array with at least 2 elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<EntryFields, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let id = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
                let description = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(EntryFields(id, description))
            }
        }

        deserializer.deserialize_seq(EntryFieldsVisitor)
    }
}

/// All entries of a ceremony document, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CeremonyDocument {
    entries: Vec<CeremonyEntry>,
}

impl CeremonyDocument {
    /// Load and validate a document from disk
    ///
    /// The file is read in full (and closed) before parsing starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading ceremony document from {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| {
            tracing::error!("Cannot read {}: {}", path.display(), source);
            CodegenError::NotFound { path: path.to_path_buf(), source }
        })?;

        let document = Self::parse(&text, || format!("input file {}", path.display()))?;
        tracing::info!("  Entries: {}", document.len());
        Ok(document)
    }

    /// Parse and validate a document held in memory
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, || "input text".to_string())
    }

    fn parse(text: &str, origin: impl FnOnce() -> String) -> Result<Self> {
        let raw: IndexMap<String, Value> = serde_json::from_str(text).map_err(|source| {
            let origin = origin();
            tracing::error!("{} is not a valid JSON object: {}", origin, source);
            CodegenError::Parse { origin, source }
        })?;

        let entries = raw
            .into_iter()
            .map(|(key, value)| CeremonyEntry::from_value(key, value))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| tracing::error!("{}", err))?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CeremonyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::String(_) => "a string".to_string(),
        Value::Object(_) => "an object".to_string(),
        Value::Array(items) if items.len() == 1 => "an array of 1 element".to_string(),
        Value::Array(items) => format!("an array of {} elements", items.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (result, logs)
    }

    fn keys(document: &CeremonyDocument) -> Vec<&str> {
        document.entries().iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_entries_keep_source_order() {
        let document = CeremonyDocument::from_json_str(
            r#"{"zeta": ["z", "Last"], "alpha": ["a", "First"], "mid_way": ["m", "Middle"]}"#,
        )
        .unwrap();
        assert_eq!(keys(&document), vec!["zeta", "alpha", "mid_way"]);
    }

    #[test]
    fn test_repeated_key_keeps_first_position_last_value() {
        let document = CeremonyDocument::from_json_str(
            r#"{"a": ["1", "old"], "b": ["2", "bee"], "a": ["3", "new"]}"#,
        )
        .unwrap();
        assert_eq!(keys(&document), vec!["a", "b"]);
        assert_eq!(document.entries()[0].description_text(), "new");
    }

    #[test]
    fn test_extra_elements_ignored() {
        let entry = CeremonyEntry::from_value(
            "fire_heart".to_string(),
            json!(["x", "A cat dies", "unused", 7]),
        )
        .unwrap();
        assert_eq!(entry.id, json!("x"));
        assert_eq!(entry.description_text(), "A cat dies");
    }

    #[test]
    fn test_description_text_is_not_escaped() {
        let entry =
            CeremonyEntry::from_value("k".to_string(), json!(["x", "say \"hi\"\n"])).unwrap();
        assert_eq!(entry.description_text(), "say \"hi\"\n");

        let entry = CeremonyEntry::from_value("k".to_string(), json!(["x", 12])).unwrap();
        assert_eq!(entry.description_text(), "12");

        let entry = CeremonyEntry::from_value("k".to_string(), json!(["x", [1, "b"]])).unwrap();
        assert_eq!(entry.description_text(), r#"[1,"b"]"#);
    }

    #[test]
    fn test_short_array_is_shape_error() {
        let err = CeremonyDocument::from_json_str(r#"{"ok": ["x", "fine"], "bad": ["only"]}"#)
            .unwrap_err();
        match err {
            CodegenError::Shape { key, found } => {
                assert_eq!(key, "bad");
                assert_eq!(found, "an array of 1 element");
            }
            other => panic!("expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_array_values_are_shape_errors() {
        for (value, found) in [
            (json!("ab"), "a string"),
            (json!(null), "null"),
            (json!({"id": "x"}), "an object"),
            (json!([]), "an array of 0 elements"),
        ] {
            match CeremonyEntry::from_value("k".to_string(), value) {
                Err(CodegenError::Shape { found: actual, .. }) => assert_eq!(actual, found),
                other => panic!("expected shape error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = CeremonyDocument::from_json_str(r#"{"fire_heart": ["x", "#).unwrap_err();
        assert!(matches!(err, CodegenError::Parse { .. }));
    }

    #[test]
    fn test_top_level_array_is_parse_error() {
        let err = CeremonyDocument::from_json_str(r#"[["x", "y"]]"#).unwrap_err();
        assert!(matches!(err, CodegenError::Parse { .. }));
    }

    #[test]
    fn test_empty_object() {
        let document = CeremonyDocument::from_json_str("{}").unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CeremonyDocument::load(dir.path().join("Master.json")).unwrap_err();
        assert!(matches!(err, CodegenError::NotFound { .. }));
    }

    #[test]
    fn test_load_failures_are_logged_as_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("Master.json");
        let (result, logs) = capture_logs(|| CeremonyDocument::load(&missing));
        assert!(result.is_err());
        assert!(logs.contains("ERROR"), "logs: {}", logs);
        assert!(logs.contains("Cannot read"), "logs: {}", logs);

        let bad_json = dir.path().join("bad.json");
        fs::write(&bad_json, "{not json").unwrap();
        let (result, logs) = capture_logs(|| CeremonyDocument::load(&bad_json));
        assert!(matches!(result, Err(CodegenError::Parse { .. })));
        assert!(logs.contains("ERROR"), "logs: {}", logs);
        assert!(logs.contains("is not a valid JSON object"), "logs: {}", logs);

        let short = dir.path().join("short.json");
        fs::write(&short, r#"{"leaf_fall": ["y"]}"#).unwrap();
        let (result, logs) = capture_logs(|| CeremonyDocument::load(&short));
        assert!(matches!(result, Err(CodegenError::Shape { .. })));
        assert!(logs.contains("ERROR"), "logs: {}", logs);
        assert!(logs.contains("entry `leaf_fall`"), "logs: {}", logs);
    }

    #[test]
    fn test_successful_load_logs_no_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Master.json");
        fs::write(&path, r#"{"fire_heart": ["x", "A cat dies"]}"#).unwrap();

        let (result, logs) = capture_logs(|| CeremonyDocument::load(&path));
        assert_eq!(result.unwrap().len(), 1);
        assert!(!logs.contains("ERROR"), "logs: {}", logs);
        assert!(logs.contains("Entries: 1"), "logs: {}", logs);
    }
}
