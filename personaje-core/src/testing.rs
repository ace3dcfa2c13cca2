//! Testing utilities for the wizard.
//!
//! Provides an in-memory [`Store`] so wizard behavior can be exercised
//! deterministically without touching the filesystem, and a fixture record
//! that passes every step.

use crate::character::{Character, Field, FieldKind};
use crate::persist::{PersistError, Store};
use std::io::{Error, ErrorKind};

/// An in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<Character>,
    save_count: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// An empty store: no prior draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding a prior draft.
    pub fn with_record(character: Character) -> Self {
        Self {
            saved: Some(character),
            ..Self::default()
        }
    }

    /// A store whose saves always fail, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The currently stored record, if any.
    pub fn saved(&self) -> Option<&Character> {
        self.saved.as_ref()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Option<Character> {
        self.saved.clone()
    }

    fn save(&mut self, character: &Character) -> Result<(), PersistError> {
        self.save_count += 1;
        if self.fail_saves {
            return Err(Error::new(ErrorKind::Other, "store unavailable").into());
        }
        self.saved = Some(character.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        self.saved = None;
        Ok(())
    }
}

/// A record that validates on every step: all text fields filled, all
/// attributes mid-range.
pub fn complete_character() -> Character {
    let mut character = Character::default();
    for field in Field::all() {
        match field.kind() {
            FieldKind::Text => character.set(*field, field.label()),
            FieldKind::Attribute => character.set(*field, 10),
        }
    }
    character
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_step;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().is_none());

        let character = complete_character();
        store.save(&character).expect("save should succeed");
        assert_eq!(store.load(), Some(character));
        assert_eq!(store.save_count(), 1);

        store.clear().expect("clear should succeed");
        assert!(store.load().is_none());
    }

    #[test]
    fn test_failing_store() {
        let mut store = MemoryStore::failing();
        assert!(store.save(&complete_character()).is_err());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_complete_character_is_valid_everywhere() {
        let character = complete_character();
        for index in 0..crate::steps::step_count() {
            assert!(validate_step(index, &character).is_ok(), "step {index}");
        }
    }
}
