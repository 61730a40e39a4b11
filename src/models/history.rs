use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Reserved key carrying the failure text of a diagnostic entry
pub const ERROR_KEY: &str = "Ошибка";

/// Reserved key carrying the remediation hint of a diagnostic entry
pub const RECOMMENDATION_KEY: &str = "Рекомендация";

/// Remediation hint attached to every corrupted-file diagnostic
pub const CORRUPTED_FILE_RECOMMENDATION: &str =
    "Проверьте корректность XML-файла. Возможно, есть неэкранированные спецсимволы или битая структура.";

const PARTIAL_PARSE_PREFIX: &str = "Частичный парсинг: ";
const CORRUPTED_FILE_PREFIX: &str = "Файл повреждён: ";

/// Direct children of one XML element: tag name mapped to the child's text
///
/// Keys keep the position of their first insertion. Inserting an existing key
/// replaces its value, so the last sibling with a given tag wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEntry {
    fields: Vec<(String, Option<String>)>,
}

impl HistoryEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a key; the outer `Option` is key presence, the inner one is the text
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.fields.iter().find(|(existing, _)| existing == key).map(|(_, value)| value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when the entry carries failure text instead of domain fields
    pub fn is_diagnostic(&self) -> bool {
        self.get(ERROR_KEY).is_some()
    }

    /// Diagnostic produced when the sanitize-and-retry pass fails too
    pub fn partial_parse_failure(reason: &str) -> Self {
        let mut entry = Self::new();
        entry.insert(ERROR_KEY, Some(format!("{PARTIAL_PARSE_PREFIX}{reason}")));
        entry
    }

    /// Diagnostic appended whenever a history file fails strict parsing
    pub fn corrupted_file(reason: &str, file_name: &str) -> Self {
        let mut entry = Self::new();
        entry.insert(ERROR_KEY, Some(format!("{CORRUPTED_FILE_PREFIX}{reason} (файл: {file_name})")));
        entry.insert(RECOMMENDATION_KEY, Some(CORRUPTED_FILE_RECOMMENDATION.to_string()));
        entry
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for HistoryEntry {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut entry = Self::new();
        for (key, value) in iter {
            entry.insert(key, value);
        }
        entry
    }
}

impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Result of looking up one client's credit history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// No letter folder or no matching file; absence of history is normal
    Missing,
    /// The file parsed cleanly
    Extracted { file_name: String, entries: Vec<HistoryEntry> },
    /// The file failed strict parsing; `entries` ends with the diagnostic entries
    Degraded { file_name: String, entries: Vec<HistoryEntry> },
}

impl HistoryOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::Extracted { file_name, .. } | Self::Degraded { file_name, .. } => {
                Some(file_name.as_str())
            }
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        match self {
            Self::Missing => &[],
            Self::Extracted { entries, .. } | Self::Degraded { entries, .. } => entries.as_slice(),
        }
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        match self {
            Self::Missing => Vec::new(),
            Self::Extracted { entries, .. } | Self::Degraded { entries, .. } => entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut entry = HistoryEntry::new();
        entry.insert("loan", Some("first".to_string()));
        entry.insert("payment", None);
        entry.insert("loan", Some("second".to_string()));

        let keys: Vec<&str> = entry.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["loan", "payment"]);
        assert_eq!(entry.get("loan"), Some(Some("second")));
        assert_eq!(entry.get("payment"), Some(None));
        assert_eq!(entry.get("missing"), None);
    }

    #[test]
    fn test_corrupted_file_diagnostic_text() {
        let entry = HistoryEntry::corrupted_file("unexpected end of stream", "007_loans.xml");

        assert!(entry.is_diagnostic());
        assert_eq!(
            entry.get(ERROR_KEY),
            Some(Some("Файл повреждён: unexpected end of stream (файл: 007_loans.xml)"))
        );
        assert_eq!(entry.get(RECOMMENDATION_KEY), Some(Some(CORRUPTED_FILE_RECOMMENDATION)));
    }

    #[test]
    fn test_partial_parse_diagnostic_text() {
        let entry = HistoryEntry::partial_parse_failure("bad token");
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get(ERROR_KEY), Some(Some("Частичный парсинг: bad token")));
    }

    #[test]
    fn test_serialize_preserves_order_and_nulls() {
        let entry: HistoryEntry =
            [("zeta", Some("1".to_string())), ("alpha", None)].into_iter().collect();

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":null}"#);
    }

    #[test]
    fn test_missing_outcome_has_no_entries() {
        let outcome = HistoryOutcome::Missing;
        assert!(!outcome.is_degraded());
        assert!(outcome.file_name().is_none());
        assert!(outcome.into_entries().is_empty());
    }
}
