//! Main application state.
//!
//! `App` wraps the core wizard with the UI-only state the terminal needs:
//! which field is highlighted, and a status line for persistence problems.
//! All sheet data and navigation rules live in the core; the app only
//! translates edits and movement into core calls.

use personaje_core::{Field, FieldKind, FieldValue, PersistError, Store, Wizard};

use crate::ui::theme::Theme;

/// Application state for the terminal wizard.
pub struct App<S: Store> {
    pub wizard: Wizard<S>,
    pub theme: Theme,
    /// Index of the highlighted field: within the current step's field
    /// list, or within the full sheet on the summary screen.
    pub selected: usize,
    /// One-line status for persistence failures.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl<S: Store> App<S> {
    pub fn new(wizard: Wizard<S>) -> Self {
        Self {
            wizard,
            theme: Theme::default(),
            selected: 0,
            status: None,
            should_quit: false,
        }
    }

    /// The fields the highlight moves over on the current screen.
    pub fn visible_fields(&self) -> &'static [Field] {
        if self.wizard.summary_visible() {
            Field::all()
        } else {
            self.wizard.current_step().fields
        }
    }

    /// The highlighted field.
    pub fn selected_field(&self) -> Field {
        let fields = self.visible_fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    /// The field a typed character goes to, if any. On the summary only an
    /// active inline edit receives input.
    pub fn edit_target(&self) -> Option<Field> {
        if self.wizard.summary_visible() {
            self.wizard.editing()
        } else {
            Some(self.selected_field())
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_fields().len();
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_next(&mut self) {
        let len = self.visible_fields().len();
        self.selected = (self.selected + 1) % len;
    }

    /// Append a typed character to the target field's raw value.
    ///
    /// Attribute fields take digits (and `-` to flip sign) with no
    /// clamping; an out-of-range value stays until the next validation.
    pub fn type_char(&mut self, c: char) {
        let Some(field) = self.edit_target() else {
            return;
        };
        let value = match (field.kind(), self.wizard.character().get(field)) {
            (FieldKind::Text, FieldValue::Text(mut s)) => {
                s.push(c);
                FieldValue::Text(s)
            }
            (FieldKind::Attribute, FieldValue::Attribute(n)) => match c {
                '0'..='9' => {
                    let digit = i32::from(c as u8 - b'0');
                    let digit = if n < 0 { -digit } else { digit };
                    FieldValue::Attribute(n.saturating_mul(10).saturating_add(digit))
                }
                '-' => FieldValue::Attribute(-n),
                _ => return,
            },
            _ => return,
        };
        self.apply(field, value);
    }

    /// Delete the last character of the target field's raw value.
    pub fn backspace(&mut self) {
        let Some(field) = self.edit_target() else {
            return;
        };
        let value = match self.wizard.character().get(field) {
            FieldValue::Text(mut s) => {
                s.pop();
                FieldValue::Text(s)
            }
            FieldValue::Attribute(n) => FieldValue::Attribute(n / 10),
        };
        self.apply(field, value);
    }

    fn apply(&mut self, field: Field, value: FieldValue) {
        let err = self.wizard.set_field(field, value).err();
        self.report(err);
    }

    /// Advance to the next step, or finish from the last one.
    pub fn advance(&mut self) {
        if self.wizard.step_index() + 1 == personaje_core::step_count() {
            match self.wizard.finish() {
                Ok(true) => self.selected = 0,
                Ok(false) => {}
                Err(e) => self.report(Some(e)),
            }
        } else if self.wizard.next() {
            self.selected = 0;
        }
    }

    /// Go back one step, or quit from step 0.
    pub fn retreat(&mut self) {
        if self.wizard.step_index() == 0 {
            self.should_quit = true;
        } else {
            self.wizard.back();
            self.selected = 0;
        }
    }

    pub fn begin_edit(&mut self) {
        self.wizard.begin_edit(self.selected_field());
    }

    pub fn commit_edit(&mut self) {
        self.wizard.commit_edit();
    }

    /// "Crear otro personaje": wipe the draft and start over.
    pub fn reset(&mut self) {
        let result = self.wizard.reset_all().err();
        self.report(result);
        self.selected = 0;
    }

    fn report(&mut self, error: Option<PersistError>) {
        self.status = error.map(|e| format!("No se pudo guardar: {e}"));
    }
}
