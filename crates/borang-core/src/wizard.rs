//! The wizard controller: the single surface the presentation layer talks to.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::fields::{BagName, DocumentRef, FieldStore, FieldValue};
use crate::steps::{Step, StepSequencer, LAST_STEP, STEPS};

/// Owns the full application state and sequences every transition.
///
/// The renderer holds a shared reference for reading and calls the intent
/// methods below for writing; nothing else mutates the state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wizard {
    sequencer: StepSequencer,
    fields: FieldStore,
    submitted: bool,
    submitted_at: Option<DateTime<Local>>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    // --- read surface ---

    pub fn current_step_id(&self) -> u8 {
        self.sequencer.current()
    }

    pub fn current_step(&self) -> &'static Step {
        self.sequencer.current_step()
    }

    pub fn steps(&self) -> &'static [Step] {
        &STEPS
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn submitted_at(&self) -> Option<DateTime<Local>> {
        self.submitted_at
    }

    pub fn on_first_step(&self) -> bool {
        self.sequencer.is_first()
    }

    pub fn on_last_step(&self) -> bool {
        self.sequencer.is_last()
    }

    /// Whether forward navigation is currently allowed. Step 1 requires a
    /// complete unit selection; every other step is freely advanceable.
    pub fn can_advance(&self) -> bool {
        !self.sequencer.is_first() || self.fields.unit_selected()
    }

    // --- intents ---

    pub fn advance(&mut self) {
        self.sequencer.advance(self.can_advance());
    }

    pub fn retreat(&mut self) {
        self.sequencer.retreat();
    }

    /// Return to an already-visited step; forward jumps are ignored.
    pub fn jump_to(&mut self, target: u8) {
        self.sequencer.jump_to(target);
    }

    pub fn set_unit_type(&mut self, unit_type: impl Into<String>) {
        self.fields.set_unit_type(unit_type);
    }

    pub fn set_unit_level(&mut self, unit_level: impl Into<String>) {
        self.fields.set_unit_level(unit_level);
    }

    pub fn update_field(
        &mut self,
        bag: BagName,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) {
        self.fields.update_field(bag, key, value);
    }

    pub fn set_document(&mut self, document: Option<DocumentRef>) {
        self.fields.set_document(document);
    }

    /// Mark the application as submitted. Only valid on the final step; no
    /// field completeness is checked beyond that (completeness is advisory,
    /// surfaced by the renderer only).
    pub fn submit(&mut self) -> Result<(), WizardError> {
        if self.sequencer.current() != LAST_STEP {
            return Err(WizardError::NotAtFinalStep {
                current: self.sequencer.current(),
            });
        }
        self.submitted = true;
        self.submitted_at = Some(Local::now());
        Ok(())
    }

    /// Back to a blank application on step 1. Also the only way out of the
    /// submitted state ("Permohonan Baru" on the success screen).
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_unit_selection(wizard: &mut Wizard) {
        wizard.set_unit_type("3 Bilik Tidur");
        wizard.set_unit_level("Tingkat Satu");
    }

    #[test]
    fn test_advance_gated_on_step_one() {
        let mut wizard = Wizard::new();
        assert!(!wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.current_step_id(), 1);

        wizard.set_unit_type("3 Bilik Tidur");
        assert!(!wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.current_step_id(), 1);

        wizard.set_unit_level("Tingkat Satu");
        assert!(wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.current_step_id(), 2);
    }

    #[test]
    fn test_later_steps_advance_unconditionally() {
        let mut wizard = Wizard::new();
        complete_unit_selection(&mut wizard);
        wizard.advance();

        for expected in [3, 4, 5, 5] {
            assert!(wizard.can_advance());
            wizard.advance();
            assert_eq!(wizard.current_step_id(), expected);
        }
    }

    #[test]
    fn test_changing_type_mid_flow_regates_step_one() {
        let mut wizard = Wizard::new();
        complete_unit_selection(&mut wizard);
        wizard.advance();
        wizard.retreat();

        // New type wipes the level, so the gate closes again.
        wizard.set_unit_type("4 Bilik Tidur");
        assert!(!wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.current_step_id(), 1);
    }

    #[test]
    fn test_jump_back_only() {
        let mut wizard = Wizard::new();
        complete_unit_selection(&mut wizard);
        for _ in 0..3 {
            wizard.advance();
        }
        assert_eq!(wizard.current_step_id(), 4);

        wizard.jump_to(5);
        assert_eq!(wizard.current_step_id(), 4);
        wizard.jump_to(2);
        assert_eq!(wizard.current_step_id(), 2);
    }

    #[test]
    fn test_submit_requires_final_step() {
        let mut wizard = Wizard::new();
        complete_unit_selection(&mut wizard);
        wizard.advance();

        let err = wizard.submit().unwrap_err();
        assert_eq!(err, WizardError::NotAtFinalStep { current: 2 });
        assert!(!wizard.submitted());
        assert!(wizard.submitted_at().is_none());

        for _ in 0..3 {
            wizard.advance();
        }
        assert_eq!(wizard.current_step_id(), 5);
        wizard.submit().unwrap();
        assert!(wizard.submitted());
        assert!(wizard.submitted_at().is_some());
    }

    #[test]
    fn test_full_application_scenario() {
        let mut wizard = Wizard::new();
        wizard.set_unit_type("3 Bilik Tidur");
        wizard.set_unit_level("Tingkat Satu");
        wizard.advance();
        assert_eq!(wizard.current_step_id(), 2);
        assert_eq!(wizard.fields().unit_level, "Tingkat Satu");

        wizard.update_field(BagName::Applicant, "nama", "Ali Bin Abu");
        wizard.update_field(BagName::Applicant, "noTel", "+60123456789");

        wizard.advance();
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.current_step_id(), 5);

        wizard.set_document(Some(DocumentRef::new("dokumen.pdf")));
        wizard.submit().unwrap();
        assert!(wizard.submitted());

        wizard.reset_all();
        assert_eq!(wizard.current_step_id(), 1);
        assert!(!wizard.submitted());
        assert_eq!(wizard.fields().unit_type, "");
        assert_eq!(wizard, Wizard::new());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut wizard = Wizard::new();
        complete_unit_selection(&mut wizard);
        wizard.update_field(BagName::Additional, "akuan", true);

        let snapshot = serde_json::to_value(&wizard).unwrap();
        let restored: Wizard = serde_json::from_value(snapshot).unwrap();
        assert_eq!(restored, wizard);
    }
}
