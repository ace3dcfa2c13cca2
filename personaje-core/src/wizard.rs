//! The wizard state machine.
//!
//! Owns the character record and the navigation state: current step,
//! whether the summary is shown, which field is being edited inline, and
//! the last validation error. One wizard is constructed at session start
//! and torn down at session end; there is no ambient global state.
//!
//! Every field mutation saves the whole record through the store before
//! returning, so a draft survives an abrupt exit.

use crate::character::{Character, Field, FieldValue};
use crate::persist::{PersistError, Store};
use crate::steps::{self, StepDefinition};
use crate::validate::{validate_step, ValidationError};

/// The step-wise character sheet wizard.
pub struct Wizard<S: Store> {
    character: Character,
    store: S,
    step: usize,
    summary_visible: bool,
    editing: Option<Field>,
    error: Option<ValidationError>,
}

impl<S: Store> Wizard<S> {
    /// Start a session: restore the persisted draft if one exists,
    /// otherwise begin fresh at step 0.
    pub fn new(store: S) -> Self {
        let character = store.load().unwrap_or_default();
        Self {
            character,
            store,
            step: 0,
            summary_visible: false,
            editing: None,
            error: None,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// 0-based index of the active step.
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        steps::step(self.step)
    }

    pub fn summary_visible(&self) -> bool {
        self.summary_visible
    }

    /// The field being edited inline from the summary, if any.
    pub fn editing(&self) -> Option<Field> {
        self.editing
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// The message to show near the navigation controls, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace one field's value and immediately persist the full record.
    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), PersistError> {
        self.character.set(field, value);
        self.store.save(&self.character)
    }

    /// Advance to the next step if the active step validates.
    ///
    /// Returns whether the wizard advanced. On failure the error message is
    /// set and the step does not change. A no-op on the last step or on the
    /// summary screen.
    pub fn next(&mut self) -> bool {
        if self.summary_visible || self.step + 1 >= steps::step_count() {
            return false;
        }
        match validate_step(self.step, &self.character) {
            Ok(()) => {
                self.error = None;
                self.step += 1;
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// Retreat one step. Never validates; floor is step 0.
    pub fn back(&mut self) {
        if !self.summary_visible && self.step > 0 {
            self.step -= 1;
        }
    }

    /// Finish the wizard from the last step.
    ///
    /// Validates the final step; on success shows the summary and forces a
    /// save. Returns whether the summary was entered. A no-op off the last
    /// step or on the summary screen.
    pub fn finish(&mut self) -> Result<bool, PersistError> {
        if self.summary_visible || self.step != steps::step_count() - 1 {
            return Ok(false);
        }
        match validate_step(self.step, &self.character) {
            Ok(()) => {
                self.error = None;
                self.summary_visible = true;
                self.store.save(&self.character)?;
                Ok(true)
            }
            Err(e) => {
                self.error = Some(e);
                Ok(false)
            }
        }
    }

    /// Start over: clear the stored draft, reset the record to defaults,
    /// and return to step 0. Only reachable from the summary.
    pub fn reset_all(&mut self) -> Result<(), PersistError> {
        if !self.summary_visible {
            return Ok(());
        }
        self.store.clear()?;
        self.character = Character::default();
        self.step = 0;
        self.summary_visible = false;
        self.editing = None;
        self.error = None;
        Ok(())
    }

    /// Begin editing one field inline from the summary. Starting a new edit
    /// abandons any prior edit target; values are written live through
    /// `set_field`, so nothing is lost.
    ///
    /// Summary edits are not re-validated. The sheet has always allowed an
    /// out-of-range or empty value to be reintroduced here.
    pub fn begin_edit(&mut self, field: Field) {
        if self.summary_visible {
            self.editing = Some(field);
        }
    }

    /// Stop editing. The value was already written and persisted via
    /// `set_field`.
    pub fn commit_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{complete_character, MemoryStore};

    fn finished_wizard() -> Wizard<MemoryStore> {
        let mut wizard = Wizard::new(MemoryStore::with_record(complete_character()));
        while wizard.next() {}
        assert_eq!(wizard.step_index(), 8);
        wizard.finish().expect("save should succeed");
        assert!(wizard.summary_visible());
        wizard
    }

    #[test]
    fn test_fresh_session_starts_at_step_zero() {
        let wizard = Wizard::new(MemoryStore::new());
        assert_eq!(wizard.step_index(), 0);
        assert!(!wizard.summary_visible());
        assert!(wizard.error().is_none());
        assert_eq!(*wizard.character(), Character::default());
    }

    #[test]
    fn test_restores_persisted_draft() {
        let mut draft = Character::default();
        draft.set(Field::Nombre, "Aria");
        let wizard = Wizard::new(MemoryStore::with_record(draft));
        assert_eq!(wizard.character().nombre, "Aria");
        assert_eq!(wizard.step_index(), 0);
    }

    #[test]
    fn test_set_field_persists_immediately() {
        let mut wizard = Wizard::new(MemoryStore::new());
        wizard.set_field(Field::Nombre, "Aria").unwrap();

        let saved = wizard.store().saved().expect("record should be saved");
        assert_eq!(saved.nombre, "Aria");
        assert_eq!(wizard.store().save_count(), 1);
    }

    #[test]
    fn test_next_advances_on_valid_step() {
        let mut wizard = Wizard::new(MemoryStore::new());
        wizard.set_field(Field::Nombre, "Aria").unwrap();
        wizard.set_field(Field::Raza, "Elf").unwrap();

        assert!(wizard.next());
        assert_eq!(wizard.step_index(), 1);
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_next_blocked_by_empty_field() {
        let mut wizard = Wizard::new(MemoryStore::new());
        wizard.set_field(Field::Nombre, "Aria").unwrap();

        assert!(!wizard.next());
        assert_eq!(wizard.step_index(), 0);
        assert_eq!(
            wizard.error_message().as_deref(),
            Some("Completa todos los campos.")
        );
    }

    #[test]
    fn test_next_blocked_by_out_of_range_attribute() {
        let mut wizard = Wizard::new(MemoryStore::with_record(complete_character()));
        for _ in 0..5 {
            assert!(wizard.next());
        }
        assert_eq!(wizard.step_index(), 5);

        wizard.set_field(Field::Fuerza, 25).unwrap();
        assert!(!wizard.next());
        assert_eq!(wizard.step_index(), 5);
        assert_eq!(
            wizard.error_message().as_deref(),
            Some("Los atributos deben estar entre 0 y 20.")
        );
    }

    #[test]
    fn test_successful_validation_clears_error() {
        let mut wizard = Wizard::new(MemoryStore::new());
        assert!(!wizard.next());
        assert!(wizard.error().is_some());

        wizard.set_field(Field::Nombre, "Aria").unwrap();
        wizard.set_field(Field::Raza, "Elf").unwrap();
        assert!(wizard.next());
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_next_never_exceeds_last_step() {
        let mut wizard = Wizard::new(MemoryStore::with_record(complete_character()));
        while wizard.next() {}
        assert_eq!(wizard.step_index(), 8);
        assert!(!wizard.next());
        assert_eq!(wizard.step_index(), 8);
    }

    #[test]
    fn test_back_is_unvalidated_and_floors_at_zero() {
        let mut wizard = Wizard::new(MemoryStore::with_record(complete_character()));
        assert!(wizard.next());
        assert!(wizard.next());

        // Ruin the current step, then go back anyway.
        wizard.set_field(Field::RasgosPersonalidad, "").unwrap();
        wizard.back();
        assert_eq!(wizard.step_index(), 1);
        wizard.back();
        assert_eq!(wizard.step_index(), 0);
        wizard.back();
        assert_eq!(wizard.step_index(), 0);
    }

    #[test]
    fn test_finish_only_from_last_step() {
        let mut wizard = Wizard::new(MemoryStore::with_record(complete_character()));
        assert!(!wizard.finish().unwrap());
        assert!(!wizard.summary_visible());
    }

    #[test]
    fn test_finish_blocked_by_invalid_last_step() {
        let mut wizard = Wizard::new(MemoryStore::with_record(complete_character()));
        while wizard.next() {}
        wizard.set_field(Field::LogrosTitulos, "  ").unwrap();

        assert!(!wizard.finish().unwrap());
        assert!(!wizard.summary_visible());
        assert_eq!(wizard.step_index(), 8);
        assert_eq!(
            wizard.error_message().as_deref(),
            Some("Completa todos los campos.")
        );
    }

    #[test]
    fn test_finish_enters_summary_and_saves() {
        let wizard = finished_wizard();
        assert!(wizard.store().saved().is_some());
    }

    #[test]
    fn test_summary_edit_persists_immediately() {
        let mut wizard = finished_wizard();

        wizard.begin_edit(Field::Raza);
        assert_eq!(wizard.editing(), Some(Field::Raza));
        wizard.set_field(Field::Raza, "Dwarf").unwrap();
        wizard.commit_edit();

        assert!(wizard.editing().is_none());
        assert_eq!(wizard.store().saved().expect("saved").raza, "Dwarf");
    }

    #[test]
    fn test_summary_edits_are_not_revalidated() {
        let mut wizard = finished_wizard();

        // Known gap carried over from the original sheet: an out-of-range
        // value can be reintroduced after finishing.
        wizard.begin_edit(Field::Fuerza);
        wizard.set_field(Field::Fuerza, 99).unwrap();
        wizard.commit_edit();

        assert!(wizard.summary_visible());
        assert!(wizard.error().is_none());
        assert_eq!(wizard.character().fuerza, 99);
    }

    #[test]
    fn test_new_edit_abandons_prior_target() {
        let mut wizard = finished_wizard();
        wizard.begin_edit(Field::Raza);
        wizard.begin_edit(Field::Nombre);
        assert_eq!(wizard.editing(), Some(Field::Nombre));
    }

    #[test]
    fn test_begin_edit_requires_summary() {
        let mut wizard = Wizard::new(MemoryStore::new());
        wizard.begin_edit(Field::Nombre);
        assert!(wizard.editing().is_none());
    }

    #[test]
    fn test_reset_all() {
        let mut wizard = finished_wizard();
        wizard.reset_all().expect("clear should succeed");

        assert_eq!(*wizard.character(), Character::default());
        assert_eq!(wizard.step_index(), 0);
        assert!(!wizard.summary_visible());
        assert!(wizard.error().is_none());
        assert!(wizard.store().saved().is_none());
    }

    #[test]
    fn test_reset_all_requires_summary() {
        let mut wizard = Wizard::new(MemoryStore::with_record(complete_character()));
        assert!(wizard.next());
        wizard.reset_all().expect("no-op should succeed");

        // Nothing changes outside the summary.
        assert_eq!(wizard.step_index(), 1);
        assert!(wizard.store().saved().is_some());
    }

    #[test]
    fn test_save_failure_surfaces_without_breaking_navigation() {
        let mut wizard = Wizard::new(MemoryStore::failing());
        assert!(wizard.set_field(Field::Nombre, "Aria").is_err());

        // The in-memory record still took the mutation.
        assert_eq!(wizard.character().nombre, "Aria");
        assert_eq!(wizard.step_index(), 0);
    }
}
