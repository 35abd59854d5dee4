//! Core state model for the housing-rental application wizard.
//!
//! This crate is the whole of the form's logic: the fixed step sequence, the
//! house-type catalog, the entered field data, and the controller tying them
//! together. It performs no I/O and holds no presentation concerns; a
//! renderer (the `borang-sewa` TUI) reads the state and forwards user
//! intents.

pub mod catalog;
pub mod error;
pub mod fields;
pub mod steps;
pub mod wizard;

pub use catalog::{Catalog, HouseType, LevelOption};
pub use error::WizardError;
pub use fields::{Bag, BagName, DocumentRef, FieldStore, FieldValue};
pub use steps::{Step, StepSequencer, FIRST_STEP, LAST_STEP, STEPS};
pub use wizard::Wizard;
