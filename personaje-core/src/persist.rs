//! Draft persistence for the character record.
//!
//! The in-progress record is written as a single JSON document under a
//! fixed key on every mutation, so a reload resumes where the user left
//! off. Load failures are recoverable by design: a missing, unreadable, or
//! malformed document simply means "no draft".

use crate::character::Character;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The fixed key the record is stored under.
pub const STORAGE_KEY: &str = "personaje";

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value storage for the character draft.
pub trait Store {
    /// The previously saved record, or `None` if there is no usable draft.
    fn load(&self) -> Option<Character>;

    /// Serialize and store the full record, overwriting any prior value.
    fn save(&mut self, character: &Character) -> Result<(), PersistError>;

    /// Remove the stored record entirely.
    fn clear(&mut self) -> Result<(), PersistError>;
}

/// File-backed store: one JSON document per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The draft lives at
    /// `<dir>/personaje.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for FileStore {
    fn load(&self) -> Option<Character> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&mut self, character: &Character) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(character)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Field;
    use crate::testing::complete_character;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_draft_is_none() {
        let dir = TempDir::new().expect("temp dir");
        let store = FileStore::new(dir.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = FileStore::new(dir.path());

        let mut character = complete_character();
        character.set(Field::Nombre, "Aria");
        store.save(&character).expect("save should succeed");

        let loaded = store.load().expect("draft should be present");
        assert_eq!(loaded, character);
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = FileStore::new(dir.path());

        let mut character = complete_character();
        store.save(&character).expect("save should succeed");
        character.set(Field::Raza, "Dwarf");
        store.save(&character).expect("save should succeed");

        assert_eq!(store.load().expect("draft").raza, "Dwarf");
    }

    #[test]
    fn test_corrupt_draft_loads_as_none() {
        let dir = TempDir::new().expect("temp dir");
        let store = FileStore::new(dir.path());
        fs::write(store.path(), "{ not json").expect("write");
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_removes_draft() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = FileStore::new(dir.path());

        store.save(&complete_character()).expect("save");
        assert!(store.load().is_some());

        store.clear().expect("clear should succeed");
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_without_draft_is_ok() {
        let dir = TempDir::new().expect("temp dir");
        let mut store = FileStore::new(dir.path());
        store.clear().expect("clear on empty store should succeed");
    }

    #[test]
    fn test_storage_key_names_the_file() {
        let store = FileStore::new("/saves");
        assert!(store.path().ends_with("personaje.json"));
    }
}
