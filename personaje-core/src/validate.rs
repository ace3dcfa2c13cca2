//! Per-step validation.
//!
//! A step passes when every text field it owns is non-empty after trimming
//! and every attribute it owns lies in [0, 20]. Validation stops at the
//! first failing field; only one message ever surfaces per call.

use crate::character::{Character, FieldValue, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
use crate::steps;
use thiserror::Error;

/// A step validation failure. The `Display` text is the exact message shown
/// next to the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Los atributos deben estar entre 0 y 20.")]
    OutOfRange,

    #[error("Completa todos los campos.")]
    EmptyField,
}

/// Validate the fields owned by one step, in step order.
pub fn validate_step(step_index: usize, character: &Character) -> Result<(), ValidationError> {
    for field in steps::step(step_index).fields {
        match character.get(*field) {
            FieldValue::Attribute(value) => {
                if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                    return Err(ValidationError::OutOfRange);
                }
            }
            FieldValue::Text(value) => {
                if value.trim().is_empty() {
                    return Err(ValidationError::EmptyField);
                }
            }
        }
    }
    Ok(())
}
