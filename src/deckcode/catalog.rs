// src/deckcode/catalog.rs
// Card name → base card id, read once from a JSON object.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::sanitize::normalize_card_name;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read card catalog: {0}")]
    Io(#[from] io::Error),
    #[error("card catalog is not a JSON object of ids: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card {name:?} has a non-numeric id {value:?}")]
    InvalidId { name: String, value: String },
}

/// Ids appear both as numbers and as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    by_name: HashMap<String, i64>,
}

impl CardCatalog {
    pub fn from_pairs<N: AsRef<str>>(pairs: impl IntoIterator<Item = (N, i64)>) -> Self {
        let by_name = pairs
            .into_iter()
            .map(|(name, id)| (normalize_card_name(name.as_ref()), id))
            .collect();
        Self { by_name }
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, RawId> = serde_json::from_str(text)?;
        let mut pairs = Vec::with_capacity(raw.len());
        for (name, id) in raw {
            let id = match id {
                RawId::Number(n) => n,
                RawId::Text(t) => t
                    .trim()
                    .parse()
                    .map_err(|_| CatalogError::InvalidId { name: name.clone(), value: t.clone() })?,
            };
            pairs.push((name, id));
        }
        Ok(Self::from_pairs(pairs))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_json(&text)?;
        logf!("Catalog: {} cards from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Like `load`, but a missing or broken file only warns and yields an empty catalog.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(c) => c,
            Err(e) => {
                logw!("Catalog: {e} ({}), deck codes will not resolve", path.display());
                Self::default()
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.by_name.get(&normalize_card_name(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn json_ids_as_numbers_or_strings() {
        let c = CardCatalog::from_json(r#"{"Fire Lizard": "101", "Goblin": 7, "Knight　A": " 9 "}"#)
            .unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.lookup("FireLizard"), Some(101));
        assert_eq!(c.lookup("Goblin"), Some(7));
        assert_eq!(c.lookup("Knight A"), Some(9));
        assert_eq!(c.lookup("Orc"), None);
    }

    #[test]
    fn bad_ids_and_shapes_fail() {
        assert!(matches!(
            CardCatalog::from_json(r#"{"X": "abc"}"#),
            Err(CatalogError::InvalidId { .. })
        ));
        assert!(matches!(CardCatalog::from_json("[1, 2]"), Err(CatalogError::Json(_))));
        assert!(matches!(CardCatalog::from_json(r#"{"X": 1.5}"#), Err(CatalogError::Json(_))));
    }

    #[test]
    fn missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let c = CardCatalog::load_or_empty(&dir.path().join("nope.json"));
        assert!(c.is_empty());
    }

    #[test]
    fn load_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"Angel": 12}}"#).unwrap();
        let c = CardCatalog::load(f.path()).unwrap();
        assert_eq!(c.lookup("Angel"), Some(12));
    }
}
