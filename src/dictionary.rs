use crate::error::DictionaryError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk shape: a flat JSON object mapping Spanish terms to English
/// meanings, e.g. `{ "perro": "dog", "gato": "cat" }`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawDictionary(BTreeMap<String, String>);

/// Immutable Spanish → English mapping, loaded once at startup.
///
/// A `Dictionary` is non-empty and fully populated by construction: an empty
/// resource or a term with a blank meaning is rejected at load time, so every
/// later lookup during a round is guaranteed to succeed.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
    terms: Vec<String>,
}

impl Dictionary {
    pub fn new(entries: BTreeMap<String, String>) -> Result<Self, DictionaryError> {
        if entries.is_empty() {
            return Err(DictionaryError::Empty);
        }

        for (term, meaning) in &entries {
            if meaning.trim().is_empty() {
                return Err(DictionaryError::MissingMeaning { term: term.clone() });
            }
        }

        // BTreeMap iteration is sorted, so term indices are stable across runs.
        let terms = entries.keys().cloned().collect();
        Ok(Self { entries, terms })
    }

    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;
        let raw: RawDictionary = serde_json::from_str(&content)?;
        Self::new(raw.0)
    }

    pub fn meaning(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(t, m)| (t.to_string(), m.to_string()))
            .collect()
    }

    #[test]
    fn test_new_rejects_empty_dictionary() {
        let result = Dictionary::new(BTreeMap::new());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn test_new_rejects_blank_meaning() {
        let result = Dictionary::new(entries(&[("perro", "dog"), ("gato", "   ")]));
        match result {
            Err(DictionaryError::MissingMeaning { term }) => assert_eq!(term, "gato"),
            other => panic!("expected MissingMeaning, got {:?}", other),
        }
    }

    #[test]
    fn test_meaning_lookup() {
        let dict = Dictionary::new(entries(&[("perro", "dog"), ("gato", "cat")])).unwrap();
        assert_eq!(dict.meaning("perro"), Some("dog"));
        assert_eq!(dict.meaning("gato"), Some("cat"));
        assert_eq!(dict.meaning("pez"), None);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_terms_are_sorted() {
        let dict = Dictionary::new(entries(&[("perro", "dog"), ("gato", "cat"), ("agua", "water")]))
            .unwrap();
        assert_eq!(dict.terms(), ["agua", "gato", "perro"]);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"perro": "dog", "gato": "cat"}}"#).unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.meaning("perro"), Some("dog"));
    }

    #[test]
    fn test_load_empty_object_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let result = Dictionary::load(file.path());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Dictionary::load(file.path());
        assert!(matches!(result, Err(DictionaryError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Dictionary::load(Path::new("no/such/dictionary.json"));
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }
}
