//! Form data storage: the unit selection, the three open field bags, and the
//! optional document reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single stored field value. Most fields are free text; the declaration
/// acknowledgement is the one boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// An open key/value record for one logical group of fields.
pub type Bag = BTreeMap<String, FieldValue>;

/// The three field bags of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BagName {
    /// Primary applicant details (butiran pemohon).
    Applicant,
    /// Spouse details (butiran pasangan).
    Spouse,
    /// Background and current-status details (maklumat tambahan).
    Additional,
}

/// Reference to the single externally supplied attachment. Name only; the
/// wizard never touches file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
}

impl DocumentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Holds everything the applicant has entered so far.
///
/// Updates are atomic per key: writing one field never clobbers its
/// siblings. No value is validated here; "required" markers and catalog
/// membership are presentation concerns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStore {
    pub unit_type: String,
    pub unit_level: String,
    pub applicant: Bag,
    pub spouse: Bag,
    pub additional: Bag,
    pub document: Option<DocumentRef>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a house type. A level chosen for the previous type is never
    /// valid for the new one, so the level selection is cleared.
    pub fn set_unit_type(&mut self, unit_type: impl Into<String>) {
        self.unit_type = unit_type.into();
        self.unit_level.clear();
    }

    pub fn set_unit_level(&mut self, unit_level: impl Into<String>) {
        self.unit_level = unit_level.into();
    }

    /// True once both halves of the unit selection are made; the gate for
    /// leaving step 1.
    pub fn unit_selected(&self) -> bool {
        !self.unit_type.is_empty() && !self.unit_level.is_empty()
    }

    /// Merge a single key into the named bag, preserving all other keys.
    pub fn update_field(
        &mut self,
        bag: BagName,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) {
        self.bag_mut(bag).insert(key.into(), value.into());
    }

    pub fn bag(&self, bag: BagName) -> &Bag {
        match bag {
            BagName::Applicant => &self.applicant,
            BagName::Spouse => &self.spouse,
            BagName::Additional => &self.additional,
        }
    }

    fn bag_mut(&mut self, bag: BagName) -> &mut Bag {
        match bag {
            BagName::Applicant => &mut self.applicant,
            BagName::Spouse => &mut self.spouse,
            BagName::Additional => &mut self.additional,
        }
    }

    /// Stored text for a field, empty string when unset.
    pub fn text(&self, bag: BagName, key: &str) -> &str {
        self.bag(bag).get(key).map(|v| v.as_text()).unwrap_or("")
    }

    /// Stored flag for a field, false when unset.
    pub fn flag(&self, bag: BagName, key: &str) -> bool {
        self.bag(bag).get(key).map(|v| v.as_flag()).unwrap_or(false)
    }

    /// Replace the document reference wholesale.
    pub fn set_document(&mut self, document: Option<DocumentRef>) {
        self.document = document;
    }

    /// Clear everything back to the fresh state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_unit_type_clears_level() {
        let mut store = FieldStore::new();
        store.set_unit_type("3 Bilik Tidur");
        store.set_unit_level("Tingkat Satu");
        assert!(store.unit_selected());

        store.set_unit_type("4 Bilik Tidur");
        assert_eq!(store.unit_type, "4 Bilik Tidur");
        assert_eq!(store.unit_level, "");
        assert!(!store.unit_selected());
    }

    #[test]
    fn test_update_field_preserves_siblings() {
        let mut store = FieldStore::new();
        store.update_field(BagName::Applicant, "nama", "Ali");
        store.update_field(BagName::Applicant, "noTel", "+60123");

        assert_eq!(store.text(BagName::Applicant, "nama"), "Ali");
        assert_eq!(store.text(BagName::Applicant, "noTel"), "+60123");

        store.update_field(BagName::Applicant, "nama", "Abu");
        assert_eq!(store.text(BagName::Applicant, "nama"), "Abu");
        assert_eq!(store.text(BagName::Applicant, "noTel"), "+60123");
    }

    #[test]
    fn test_bags_are_independent() {
        let mut store = FieldStore::new();
        store.update_field(BagName::Applicant, "nama", "Ali");
        store.update_field(BagName::Spouse, "nama", "Aminah");

        assert_eq!(store.text(BagName::Applicant, "nama"), "Ali");
        assert_eq!(store.text(BagName::Spouse, "nama"), "Aminah");
        assert!(store.additional.is_empty());
    }

    #[test]
    fn test_flag_fields() {
        let mut store = FieldStore::new();
        assert!(!store.flag(BagName::Additional, "akuan"));
        store.update_field(BagName::Additional, "akuan", true);
        assert!(store.flag(BagName::Additional, "akuan"));
        // A text value is never a set flag, and vice versa.
        assert_eq!(store.text(BagName::Additional, "akuan"), "");
    }

    #[test]
    fn test_document_replacement() {
        let mut store = FieldStore::new();
        store.set_document(Some(DocumentRef::new("kad_pengenalan.pdf")));
        store.set_document(Some(DocumentRef::new("slip_gaji.pdf")));
        assert_eq!(store.document.as_ref().unwrap().name, "slip_gaji.pdf");
        store.set_document(None);
        assert!(store.document.is_none());
    }

    #[test]
    fn test_reset_round_trip() {
        let mut store = FieldStore::new();
        store.set_unit_type("3 Bilik Tidur");
        store.set_unit_level("Tingkat Dua");
        store.update_field(BagName::Applicant, "nama", "Ali");
        store.update_field(BagName::Additional, "akuan", true);
        store.set_document(Some(DocumentRef::new("dokumen.pdf")));

        store.reset();
        assert_eq!(store, FieldStore::new());
    }
}
