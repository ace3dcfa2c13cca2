//! Step-wise character sheet wizard.
//!
//! This crate provides:
//! - A flat 22-field character record with camelCase JSON persistence
//! - A fixed 9-step catalog partitioning the fields
//! - Per-step validation with user-facing messages
//! - The wizard state machine (navigation, summary, inline edits)
//! - A key-value persistence adapter that saves on every mutation
//!
//! # Quick Start
//!
//! ```
//! use personaje_core::{Field, FileStore, Wizard};
//!
//! let store = FileStore::new("/tmp/personaje-demo");
//! let mut wizard = Wizard::new(store);
//!
//! wizard.set_field(Field::Nombre, "Aria")?;
//! wizard.set_field(Field::Raza, "Elf")?;
//! assert!(wizard.next());
//! # Ok::<(), personaje_core::PersistError>(())
//! ```

pub mod character;
pub mod persist;
pub mod steps;
pub mod testing;
pub mod validate;
pub mod wizard;

// Primary public API
pub use character::{Character, Field, FieldKind, FieldValue, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
pub use persist::{FileStore, PersistError, Store, STORAGE_KEY};
pub use steps::{step, step_count, StepDefinition, STEPS};
pub use validate::{validate_step, ValidationError};
pub use wizard::Wizard;
