//! The single source of truth for an in-progress submission.

use serde::{Deserialize, Serialize};

use super::{AddressField, AddressKind, DocSlot, DocType, FieldPath, FieldUpdate, IdentityField};
use crate::ids::ArtifactRef;

/// Personal details captured on the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`, as entered.
    pub date_of_birth: String,
    pub photo_ref: Option<ArtifactRef>,
}

impl Identity {
    pub fn field(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::FirstName => &self.first_name,
            IdentityField::LastName => &self.last_name,
            IdentityField::Email => &self.email,
            IdentityField::Phone => &self.phone,
            IdentityField::DateOfBirth => &self.date_of_birth,
        }
    }

    fn field_mut(&mut self, field: IdentityField) -> &mut String {
        match field {
            IdentityField::FirstName => &mut self.first_name,
            IdentityField::LastName => &mut self.last_name,
            IdentityField::Email => &mut self.email,
            IdentityField::Phone => &mut self.phone,
            IdentityField::DateOfBirth => &mut self.date_of_birth,
        }
    }

    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::ZipCode => &self.zip_code,
            AddressField::Country => &self.country,
        }
    }

    fn field_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Street => &mut self.street,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::ZipCode => &mut self.zip_code,
            AddressField::Country => &mut self.country,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentSelection {
    pub doc_type: DocType,
    pub file_ref: Option<ArtifactRef>,
}

/// All user-entered values for one submission session.
///
/// Every text field defaults to `""`, never absent, so callers never have to
/// tell "missing" apart from "empty". Values are changed by replacement only:
/// [`FieldStore::apply`] returns a new store and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldStore {
    pub identity: Identity,
    pub permanent_address: Address,
    pub corporate_address: Address,
    pub permanent_doc: DocumentSelection,
    pub corporate_doc: DocumentSelection,
    pub liveness_photo_ref: Option<ArtifactRef>,
}

impl FieldStore {
    pub fn address(&self, kind: AddressKind) -> &Address {
        match kind {
            AddressKind::Permanent => &self.permanent_address,
            AddressKind::Corporate => &self.corporate_address,
        }
    }

    pub fn document(&self, slot: DocSlot) -> &DocumentSelection {
        match slot {
            DocSlot::Permanent => &self.permanent_doc,
            DocSlot::Corporate => &self.corporate_doc,
        }
    }

    fn address_mut(&mut self, kind: AddressKind) -> &mut Address {
        match kind {
            AddressKind::Permanent => &mut self.permanent_address,
            AddressKind::Corporate => &mut self.corporate_address,
        }
    }

    fn document_mut(&mut self, slot: DocSlot) -> &mut DocumentSelection {
        match slot {
            DocSlot::Permanent => &mut self.permanent_doc,
            DocSlot::Corporate => &mut self.corporate_doc,
        }
    }

    /// Returns a new store with `update` applied.
    pub fn apply(&self, update: FieldUpdate) -> FieldStore {
        let mut next = self.clone();
        match update {
            FieldUpdate::Identity { field, value } => *next.identity.field_mut(field) = value,
            FieldUpdate::IdentityPhoto { photo_ref } => next.identity.photo_ref = photo_ref,
            FieldUpdate::Address { kind, field, value } => {
                *next.address_mut(kind).field_mut(field) = value
            }
            FieldUpdate::DocType { slot, doc_type } => next.document_mut(slot).doc_type = doc_type,
            FieldUpdate::DocFile { slot, file_ref } => next.document_mut(slot).file_ref = file_ref,
            FieldUpdate::LivenessPhoto { photo_ref } => next.liveness_photo_ref = photo_ref,
        }
        next
    }

    /// Text value at `path`, or `None` for non-text fields.
    pub fn text(&self, path: FieldPath) -> Option<&str> {
        match path {
            FieldPath::Identity(field) => Some(self.identity.field(field)),
            FieldPath::Address(kind, field) => Some(self.address(kind).field(field)),
            _ => None,
        }
    }

    /// Whether the value at `path` is empty (whitespace only) or an absent artifact.
    ///
    /// Document types are a closed set with a default, so they are never blank.
    pub fn is_blank(&self, path: FieldPath) -> bool {
        match path {
            FieldPath::Identity(_) | FieldPath::Address(..) => {
                self.text(path).map_or(true, |value| value.trim().is_empty())
            }
            FieldPath::IdentityPhoto => self.identity.photo_ref.is_none(),
            FieldPath::DocType(_) => false,
            FieldPath::DocFile(slot) => self.document(slot).file_ref.is_none(),
            FieldPath::LivenessPhoto => self.liveness_photo_ref.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_has_empty_strings_and_no_artifacts() {
        let store = FieldStore::default();
        assert_eq!(store.identity.email, "");
        assert_eq!(store.corporate_address.zip_code, "");
        assert_eq!(store.permanent_doc.doc_type, DocType::Aadhar);
        assert!(store.liveness_photo_ref.is_none());
    }

    #[test]
    fn apply_returns_new_store_and_keeps_original() {
        let original = FieldStore::default();
        let updated = original.apply(FieldUpdate::identity(IdentityField::Email, "a@b.io"));

        assert_eq!(original.identity.email, "");
        assert_eq!(updated.identity.email, "a@b.io");
    }

    #[test]
    fn apply_targets_the_right_address_section() {
        let store = FieldStore::default().apply(FieldUpdate::address(
            AddressKind::Corporate,
            AddressField::City,
            "Bangalore",
        ));

        assert_eq!(store.corporate_address.city, "Bangalore");
        assert_eq!(store.permanent_address.city, "");
    }

    #[test]
    fn whitespace_only_text_counts_as_blank() {
        let store =
            FieldStore::default().apply(FieldUpdate::identity(IdentityField::Phone, "   "));
        assert!(store.is_blank(FieldPath::Identity(IdentityField::Phone)));
    }

    #[test]
    fn doc_type_is_never_blank() {
        let store = FieldStore::default();
        assert!(!store.is_blank(FieldPath::DocType(DocSlot::Permanent)));
        assert!(store.is_blank(FieldPath::DocFile(DocSlot::Permanent)));
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let store: FieldStore =
            serde_json::from_str(r#"{"identity":{"firstName":"Priya"}}"#).unwrap();
        assert_eq!(store.identity.first_name, "Priya");
        assert_eq!(store.identity.last_name, "");
        assert_eq!(store.corporate_doc, DocumentSelection::default());
    }
}
