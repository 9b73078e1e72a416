//! Roster configuration: the ordered list of species a kennel is built from.
//!
//! ```toml
//! animals = ["animal", "dog", "cat"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::species::Species;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub animals: Vec<Species>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            animals: Species::ALL.to_vec(),
        }
    }
}

impl Roster {
    pub fn new(animals: Vec<Species>) -> Self {
        Self { animals }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RosterError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path).map_err(|err| RosterError::io(path, err))?;
        let roster = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), animals = roster.len(), "loaded roster");
        Ok(roster)
    }

    pub fn to_toml_string(&self) -> Result<String, RosterError> {
        Ok(toml::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert_eq!(roster.animals, vec![Species::Animal, Species::Dog, Species::Cat]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_parse_valid_toml() {
        let roster = Roster::from_toml_str(r#"animals = ["cat", "cat", "dog"]"#).unwrap();
        assert_eq!(roster.animals, vec![Species::Cat, Species::Cat, Species::Dog]);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let roster = Roster::from_toml_str("").unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_unknown_species_rejected() {
        let result = Roster::from_toml_str(r#"animals = ["dog", "cow"]"#);
        assert!(matches!(result, Err(RosterError::Parse(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Roster::from_toml_str("animals = [\"dog\"");
        assert!(matches!(result, Err(RosterError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let roster = Roster::new(vec![Species::Dog, Species::Animal]);
        let text = roster.to_toml_string().unwrap();
        assert!(text.contains("\"dog\""));
        assert_eq!(Roster::from_toml_str(&text).unwrap(), roster);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "animals = [\"cat\", \"animal\"]").unwrap();
        let roster = Roster::from_file(file.path()).unwrap();
        assert_eq!(roster.animals, vec![Species::Cat, Species::Animal]);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let result = Roster::from_file(&path);
        assert!(matches!(result, Err(RosterError::Io { .. })));
    }
}
