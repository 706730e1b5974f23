//! Ordered replacement tables
//!
//! A [`Mapping`] keeps its rules in insertion order because that order is
//! also the order in which they are applied. Inserting an existing key
//! updates the rule where it stands; new keys go to the end.

use crate::error::{MappingError, Result};
use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in corrections, in application order
const DEFAULT_RULES: &[(&str, &str)] = &[
    // ML orgs
    ("noose", "Nous"),
    ("Dali", "DALL·E"),
    ("DeepSeq", "DeepSeek"),
    // models
    (" lama ", " Llama "),
    ("Lama", "Llama"),
    ("LAMA", "Llama"),
    ("Lama 1", "Llama 1"),
    ("OMO2", "OLMo 2"),
    ("OMO1", "OLMo 1"),
    ("ALMO", "OLMo"),
    ("Allmo", "OLMo"),
    // names
    ("Swyggs", "Swyx"),
    ("Grenenfeld", "Groeneveld"),
    ("Kyle Lowe", "Kyle Lo"),
    ("Luca Soldini", "Luca Soldaini"),
];

/// Ordered set of replacement rules with unique keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    rules: Vec<Rule>,
}

/// On-disk shape of a mapping file
#[derive(Debug, Default, Serialize, Deserialize)]
struct MappingFile {
    #[serde(default, rename = "rule")]
    rules: Vec<Rule>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in correction table
    pub fn defaults() -> Self {
        DEFAULT_RULES.iter().copied().collect()
    }

    /// Insert or update a rule.
    ///
    /// Returns the previous replacement when the key already existed. An
    /// updated rule keeps its position.
    pub fn insert(
        &mut self,
        incorrect: impl Into<String>,
        correct: impl Into<String>,
    ) -> Option<String> {
        let incorrect = incorrect.into();
        let correct = correct.into();

        match self.rules.iter_mut().find(|r| r.incorrect == incorrect) {
            Some(existing) => Some(std::mem::replace(&mut existing.correct, correct)),
            None => {
                self.rules.push(Rule { incorrect, correct });
                None
            }
        }
    }

    /// Merge `other` on top of this mapping; its values win on collision
    pub fn merge(&mut self, other: Mapping) {
        for rule in other.rules {
            self.insert(rule.incorrect, rule.correct);
        }
    }

    /// Replacement for `incorrect`, if any
    pub fn get(&self, incorrect: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.incorrect == incorrect)
            .map(|r| r.correct.as_str())
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the mapping has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in application order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Parse a mapping from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    /// Load a mapping from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MappingError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Serialize to the TOML mapping file format
    pub fn to_toml_string(&self) -> Result<String> {
        let file = MappingFile {
            rules: self.rules.clone(),
        };
        toml::to_string(&file).map_err(|e| MappingError::Serialize(e.to_string()))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let file: MappingFile = toml::from_str(content).map_err(|e| MappingError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let Some(index) = file.rules.iter().position(|r| r.incorrect.is_empty()) {
            return Err(MappingError::EmptyKey { index });
        }

        log::debug!(
            "Loaded {} rules from {}",
            file.rules.len(),
            path.display()
        );

        Ok(file.rules.into_iter().map(|r| (r.incorrect, r.correct)).collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (incorrect, correct) in iter {
            mapping.insert(incorrect, correct);
        }
        mapping
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Build the working mapping: the built-in table with `overrides` merged on top
pub fn build_mapping(overrides: Option<&Mapping>) -> Mapping {
    let mut mapping = Mapping::defaults();
    if let Some(overrides) = overrides {
        mapping.merge(overrides.clone());
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn keys(mapping: &Mapping) -> Vec<&str> {
        mapping.iter().map(|r| r.incorrect.as_str()).collect()
    }

    #[test]
    fn test_defaults_order() {
        let mapping = Mapping::defaults();
        assert_eq!(mapping.len(), 15);
        assert_eq!(keys(&mapping)[0], "noose");
        assert_eq!(keys(&mapping)[3], " lama ");
        assert_eq!(keys(&mapping)[14], "Luca Soldini");
        assert_eq!(mapping.get("Dali"), Some("DALL·E"));
    }

    #[test]
    fn test_build_without_override_is_defaults() {
        assert_eq!(build_mapping(None), Mapping::defaults());
    }

    #[test]
    fn test_override_precedence() {
        let overrides: Mapping = [("Lama", "Nova")].into_iter().collect();
        let mapping = build_mapping(Some(&overrides));

        assert_eq!(mapping.get("Lama"), Some("Nova"));
        assert_eq!(mapping.len(), Mapping::defaults().len());
    }

    #[test]
    fn test_override_keeps_position_and_appends_new_keys() {
        let overrides: Mapping = [("Lama", "Nova"), ("Natan", "Nathan")].into_iter().collect();
        let mapping = build_mapping(Some(&overrides));

        let order = keys(&mapping);
        assert_eq!(order[4], "Lama");
        assert_eq!(order.last(), Some(&"Natan"));
        assert_eq!(mapping.len(), 16);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut mapping = Mapping::new();
        assert_eq!(mapping.insert("a", "b"), None);
        assert_eq!(mapping.insert("a", "c"), Some("b".to_string()));
        assert_eq!(mapping.get("a"), Some("c"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = Mapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.get("noose"), None);
    }

    #[test]
    fn test_from_toml_str() {
        let toml_content = r#"
[[rule]]
incorrect = "Lama"
correct = "Nova"

[[rule]]
incorrect = "Natan Lambert"
correct = "Nathan Lambert"
"#;

        let mapping = Mapping::from_toml_str(toml_content).unwrap();
        assert_eq!(keys(&mapping), vec!["Lama", "Natan Lambert"]);
        assert_eq!(mapping.get("Natan Lambert"), Some("Nathan Lambert"));
    }

    #[test]
    fn test_from_toml_str_without_rules() {
        let mapping = Mapping::from_toml_str("").unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_duplicate_keys_in_file() {
        let toml_content = r#"
[[rule]]
incorrect = "a"
correct = "first"

[[rule]]
incorrect = "b"
correct = "x"

[[rule]]
incorrect = "a"
correct = "second"
"#;

        let mapping = Mapping::from_toml_str(toml_content).unwrap();
        assert_eq!(keys(&mapping), vec!["a", "b"]);
        assert_eq!(mapping.get("a"), Some("second"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let toml_content = r#"
[[rule]]
incorrect = "ok"
correct = "fine"

[[rule]]
incorrect = ""
correct = "boom"
"#;

        match Mapping::from_toml_str(toml_content) {
            Err(MappingError::EmptyKey { index }) => assert_eq!(index, 1),
            other => panic!("Expected EmptyKey error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let result = Mapping::from_toml_str("[[rule]]\nincorrect = ");
        assert!(matches!(result, Err(MappingError::Parse { .. })));

        let result = Mapping::from_toml_str("[[rule]]\nincorrect = \"a\"\n");
        assert!(matches!(result, Err(MappingError::Parse { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[[rule]]\nincorrect = \"Grenenfeld\"\ncorrect = \"Groeneveld\"\n"
        )
        .unwrap();

        let mapping = Mapping::from_file(temp_file.path()).unwrap();
        assert_eq!(mapping.get("Grenenfeld"), Some("Groeneveld"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = Mapping::from_file(Path::new("/nonexistent/fixes.toml"));
        match result {
            Err(MappingError::Read { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/fixes.toml"));
            }
            other => panic!("Expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_toml_round_trip() {
        let serialized = Mapping::defaults().to_toml_string().unwrap();
        assert!(serialized.contains("[[rule]]"));
        assert!(serialized.contains("DALL·E"));

        let parsed = Mapping::from_toml_str(&serialized).unwrap();
        assert_eq!(parsed, Mapping::defaults());
    }
}
