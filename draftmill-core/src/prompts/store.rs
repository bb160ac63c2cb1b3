//! File-backed template store.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A single instruction template. `system` is free text that may contain
/// `{{token}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub system: String,
}

/// Template store persisted as one JSON blob mapping category key to
/// `{"system": ...}`.
///
/// The whole blob is read on every lookup and rewritten wholesale on every
/// update. Writes are last-writer-wins with no locking, so concurrent admin
/// edits can clobber each other.
#[derive(Debug, Clone)]
pub struct PromptStore {
    path: PathBuf,
}

impl PromptStore {
    /// Create a store backed by the given file. No I/O happens here; a
    /// missing or unreadable file surfaces on the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full key -> template mapping.
    pub fn get_all(&self) -> Result<BTreeMap<String, PromptTemplate>, StoreError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Look up one template by category key.
    pub fn get(&self, key: &str) -> Result<Option<PromptTemplate>, StoreError> {
        Ok(self.get_all()?.remove(key))
    }

    /// Replace the system text of an existing template.
    ///
    /// Unknown keys are rejected: the seeded category set is fixed and the
    /// write path cannot create new ones.
    pub fn set(&self, key: &str, system: &str) -> Result<(), StoreError> {
        let mut all = self.get_all()?;
        if !all.contains_key(key) {
            return Err(StoreError::UnknownKey(key.to_string()));
        }
        all.insert(
            key.to_string(),
            PromptTemplate {
                system: system.to_string(),
            },
        );
        let json = serde_json::to_string_pretty(&all)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seeded_store(contents: &str) -> (tempfile::TempDir, PromptStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, PromptStore::new(path))
    }

    const SEED: &str = r#"{
        "news": {"system": "뉴스 템플릿 {{유형}}"},
        "review": {"system": "리뷰 템플릿"}
    }"#;

    #[test]
    fn test_get_all_returns_every_key() {
        let (_dir, store) = seeded_store(SEED);
        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains_key("news"));
        assert!(all.contains_key("review"));
    }

    #[test]
    fn test_get_known_and_unknown_key() {
        let (_dir, store) = seeded_store(SEED);
        let news = store.get("news").unwrap().unwrap();
        assert_eq!(news.system, "뉴스 템플릿 {{유형}}");
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_set_updates_existing_key() {
        let (_dir, store) = seeded_store(SEED);
        store.set("news", "new text").unwrap();
        assert_eq!(store.get("news").unwrap().unwrap().system, "new text");
        // Other keys untouched.
        assert_eq!(store.get("review").unwrap().unwrap().system, "리뷰 템플릿");
    }

    #[test]
    fn test_set_unknown_key_rejected_and_store_unchanged() {
        let (_dir, store) = seeded_store(SEED);
        let err = store.set("brand-new", "text").unwrap_err();
        assert!(matches!(err, StoreError::UnknownKey(ref k) if k == "brand-new"));
        assert!(store.get("brand-new").unwrap().is_none());
        assert_eq!(store.get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = PromptStore::new(dir.path().join("nope.json"));
        assert!(matches!(store.get_all(), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_malformed_file_is_malformed() {
        let (_dir, store) = seeded_store("not json at all");
        assert!(matches!(store.get_all(), Err(StoreError::Malformed(_))));
    }
}
