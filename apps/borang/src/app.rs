//! UI state for the wizard renderer.
//!
//! `App` wraps the [`borang_core::Wizard`] controller with everything that is
//! presentation-only: cursor positions, the text-input buffer, and the
//! injected theme. All form state lives in the wizard; the renderer never
//! mutates it except through the controller's intent methods.

use borang_core::{BagName, Catalog, DocumentRef, FieldValue, Wizard};
use tracing::debug;

use crate::forms::{self, FieldKind, FieldSpec};
use crate::theme::Theme;

/// Current screen, derived from the wizard state: one per form step plus the
/// success screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Unit,
    Applicant,
    Spouse,
    Additional,
    Documents,
    Complete,
}

/// One selectable row on the unit step: a house type, or a level of the
/// currently selected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRow {
    House(usize),
    Level(usize, usize),
}

/// Application state
pub struct App {
    /// The wizard controller owning all form state
    pub wizard: Wizard,
    /// House-type catalog (display only; the core never checks it)
    pub catalog: Catalog,
    /// Injected style tokens
    pub theme: Theme,
    /// Cursor on the unit step
    pub unit_cursor: usize,
    /// Cursor on the applicant step
    pub applicant_cursor: usize,
    /// Cursor on the spouse step
    pub spouse_cursor: usize,
    /// Cursor on the additional-info step
    pub additional_cursor: usize,
    /// Input buffer (for text editing)
    pub input_buffer: String,
    /// Editing mode
    pub editing: bool,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            wizard: Wizard::new(),
            catalog,
            theme,
            unit_cursor: 0,
            applicant_cursor: 0,
            spouse_cursor: 0,
            additional_cursor: 0,
            input_buffer: String::new(),
            editing: false,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.wizard.submitted() {
            return Screen::Complete;
        }
        match self.wizard.current_step_id() {
            1 => Screen::Unit,
            2 => Screen::Applicant,
            3 => Screen::Spouse,
            4 => Screen::Additional,
            _ => Screen::Documents,
        }
    }

    /// The bag edited on a given screen, if it is a bag-backed form step.
    pub fn bag_for(screen: Screen) -> Option<BagName> {
        match screen {
            Screen::Applicant => Some(BagName::Applicant),
            Screen::Spouse => Some(BagName::Spouse),
            Screen::Additional => Some(BagName::Additional),
            _ => None,
        }
    }

    /// Field rows for the current form screen.
    pub fn form_fields(&self, screen: Screen) -> Vec<&'static FieldSpec> {
        match screen {
            Screen::Applicant | Screen::Spouse => forms::PERSON_FIELDS.iter().collect(),
            Screen::Additional => forms::visible_additional_fields(self.wizard.fields()),
            _ => Vec::new(),
        }
    }

    pub fn form_cursor(&self, screen: Screen) -> usize {
        match screen {
            Screen::Applicant => self.applicant_cursor,
            Screen::Spouse => self.spouse_cursor,
            Screen::Additional => self.additional_cursor,
            _ => 0,
        }
    }

    pub fn set_form_cursor(&mut self, screen: Screen, cursor: usize) {
        match screen {
            Screen::Applicant => self.applicant_cursor = cursor,
            Screen::Spouse => self.spouse_cursor = cursor,
            Screen::Additional => self.additional_cursor = cursor,
            _ => {}
        }
    }

    /// All rows of the unit step: every house type, with the selected type's
    /// levels inlined beneath it. Levels of unselected types stay hidden.
    pub fn unit_rows(&self) -> Vec<UnitRow> {
        let selected = &self.wizard.fields().unit_type;
        let mut rows = Vec::new();
        for (hi, house) in self.catalog.houses.iter().enumerate() {
            rows.push(UnitRow::House(hi));
            if &house.name == selected {
                for li in 0..house.levels.len() {
                    rows.push(UnitRow::Level(hi, li));
                }
            }
        }
        rows
    }

    /// Apply the unit-step selection under the cursor.
    pub fn select_unit_row(&mut self) {
        let rows = self.unit_rows();
        let Some(row) = rows.get(self.unit_cursor).copied() else {
            return;
        };
        match row {
            UnitRow::House(hi) => {
                let name = self.catalog.houses[hi].name.clone();
                // Re-selecting the current type would needlessly wipe the level.
                if self.wizard.fields().unit_type != name {
                    debug!(house = %name, "unit type selected");
                    self.wizard.set_unit_type(name);
                }
            }
            UnitRow::Level(hi, li) => {
                let label = self.catalog.houses[hi].levels[li].label.clone();
                debug!(level = %label, "unit level selected");
                self.wizard.set_unit_level(label);
            }
        }
    }

    /// Start editing a text field: seed the buffer with the stored value.
    pub fn begin_edit(&mut self, bag: BagName, spec: &FieldSpec) {
        self.input_buffer = self.wizard.fields().text(bag, spec.key).to_string();
        self.editing = true;
    }

    /// Commit the buffer into the field and leave editing mode.
    pub fn commit_edit(&mut self, bag: BagName, spec: &FieldSpec) {
        let value = std::mem::take(&mut self.input_buffer);
        debug!(key = spec.key, "field updated");
        self.wizard.update_field(bag, spec.key, value);
        self.editing = false;
    }

    pub fn cancel_edit(&mut self) {
        self.input_buffer.clear();
        self.editing = false;
    }

    /// Radio fields cycle through their options on Enter.
    pub fn cycle_radio(&mut self, bag: BagName, spec: &FieldSpec) {
        let FieldKind::Radio(options) = spec.kind else {
            return;
        };
        let current = self.wizard.fields().text(bag, spec.key);
        let next = match options.iter().position(|o| *o == current) {
            Some(i) => options[(i + 1) % options.len()],
            None => options[0],
        };
        self.wizard.update_field(bag, spec.key, next);
    }

    pub fn toggle_checkbox(&mut self, bag: BagName, spec: &FieldSpec) {
        let flipped = !self.wizard.fields().flag(bag, spec.key);
        self.wizard
            .update_field(bag, spec.key, FieldValue::Flag(flipped));
    }

    /// Start editing the attachment name on the documents step.
    pub fn begin_document_edit(&mut self) {
        self.input_buffer = self
            .wizard
            .fields()
            .document
            .as_ref()
            .map(|d| d.name.clone())
            .unwrap_or_default();
        self.editing = true;
    }

    /// Commit the attachment name; an empty name clears the document.
    pub fn commit_document_edit(&mut self) {
        let name = std::mem::take(&mut self.input_buffer);
        let document = if name.trim().is_empty() {
            None
        } else {
            Some(DocumentRef::new(name.trim()))
        };
        debug!(attached = document.is_some(), "document reference updated");
        self.wizard.set_document(document);
        self.editing = false;
    }

    /// Start a blank application (the success screen's "Permohonan Baru").
    pub fn new_application(&mut self) {
        debug!("starting new application");
        self.wizard.reset_all();
        self.unit_cursor = 0;
        self.applicant_cursor = 0;
        self.spouse_cursor = 0;
        self.additional_cursor = 0;
        self.input_buffer.clear();
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::default(), Theme::default())
    }

    #[test]
    fn test_screen_follows_wizard_state() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Unit);

        app.wizard.set_unit_type("3 Bilik Tidur");
        app.wizard.set_unit_level("Tingkat Satu");
        app.wizard.advance();
        assert_eq!(app.screen(), Screen::Applicant);

        for _ in 0..3 {
            app.wizard.advance();
        }
        assert_eq!(app.screen(), Screen::Documents);

        app.wizard.submit().unwrap();
        assert_eq!(app.screen(), Screen::Complete);
    }

    #[test]
    fn test_unit_rows_expand_selected_type() {
        let mut app = app();
        assert_eq!(app.unit_rows().len(), 2);

        app.unit_cursor = 0;
        app.select_unit_row();
        assert_eq!(app.wizard.fields().unit_type, "3 Bilik Tidur");
        // Two house rows plus the four levels of the selected type.
        assert_eq!(app.unit_rows().len(), 6);

        app.unit_cursor = 2; // second level of the selected type
        app.select_unit_row();
        assert_eq!(app.wizard.fields().unit_level, "Tingkat Satu");
    }

    #[test]
    fn test_reselecting_same_type_keeps_level() {
        let mut app = app();
        app.select_unit_row();
        app.unit_cursor = 1;
        app.select_unit_row();
        assert_eq!(app.wizard.fields().unit_level, "Tingkat Bawah");

        app.unit_cursor = 0;
        app.select_unit_row();
        assert_eq!(app.wizard.fields().unit_level, "Tingkat Bawah");

        // A different type does clear it.
        app.unit_cursor = 5;
        app.select_unit_row();
        assert_eq!(app.wizard.fields().unit_type, "4 Bilik Tidur");
        assert_eq!(app.wizard.fields().unit_level, "");
    }

    #[test]
    fn test_cycle_radio_wraps() {
        let mut app = app();
        let spec = forms::PERSON_FIELDS
            .iter()
            .find(|f| f.key == "jantina")
            .unwrap();

        app.cycle_radio(BagName::Applicant, spec);
        assert_eq!(app.wizard.fields().text(BagName::Applicant, "jantina"), "Lelaki");
        app.cycle_radio(BagName::Applicant, spec);
        assert_eq!(
            app.wizard.fields().text(BagName::Applicant, "jantina"),
            "Perempuan"
        );
        app.cycle_radio(BagName::Applicant, spec);
        assert_eq!(app.wizard.fields().text(BagName::Applicant, "jantina"), "Lelaki");
    }

    #[test]
    fn test_document_edit_round_trip() {
        let mut app = app();
        app.begin_document_edit();
        assert_eq!(app.input_buffer, "");
        app.input_buffer.push_str("kad_pengenalan.pdf");
        app.commit_document_edit();
        assert_eq!(
            app.wizard.fields().document.as_ref().unwrap().name,
            "kad_pengenalan.pdf"
        );

        app.begin_document_edit();
        assert_eq!(app.input_buffer, "kad_pengenalan.pdf");
        app.input_buffer.clear();
        app.commit_document_edit();
        assert!(app.wizard.fields().document.is_none());
    }
}
