use std::fmt;

use serde::{Deserialize, Serialize};

/// Text fields of the identity section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
}

/// Fields shared by both address sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Street,
    City,
    State,
    ZipCode,
    Country,
}

/// Which of the two address sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressKind {
    Permanent,
    Corporate,
}

/// Which of the two document selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocSlot {
    Permanent,
    Corporate,
}

/// Address of a single value inside a [`FieldStore`](super::FieldStore).
///
/// Renders as a dotted path, e.g. `identity.email` or `corporateAddress.zipCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldPath {
    Identity(IdentityField),
    IdentityPhoto,
    Address(AddressKind, AddressField),
    DocType(DocSlot),
    DocFile(DocSlot),
    LivenessPhoto,
}

impl IdentityField {
    pub const ALL: [IdentityField; 5] = [
        IdentityField::FirstName,
        IdentityField::LastName,
        IdentityField::Email,
        IdentityField::Phone,
        IdentityField::DateOfBirth,
    ];

    fn key(self) -> &'static str {
        match self {
            IdentityField::FirstName => "firstName",
            IdentityField::LastName => "lastName",
            IdentityField::Email => "email",
            IdentityField::Phone => "phone",
            IdentityField::DateOfBirth => "dateOfBirth",
        }
    }
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::Street,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
        AddressField::Country,
    ];

    fn key(self) -> &'static str {
        match self {
            AddressField::Street => "street",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::ZipCode => "zipCode",
            AddressField::Country => "country",
        }
    }
}

impl AddressKind {
    fn key(self) -> &'static str {
        match self {
            AddressKind::Permanent => "permanentAddress",
            AddressKind::Corporate => "corporateAddress",
        }
    }
}

impl DocSlot {
    fn key(self) -> &'static str {
        match self {
            DocSlot::Permanent => "permanentDoc",
            DocSlot::Corporate => "corporateDoc",
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Identity(field) => write!(f, "identity.{}", field.key()),
            FieldPath::IdentityPhoto => f.write_str("identity.photoRef"),
            FieldPath::Address(kind, field) => write!(f, "{}.{}", kind.key(), field.key()),
            FieldPath::DocType(slot) => write!(f, "{}.docType", slot.key()),
            FieldPath::DocFile(slot) => write!(f, "{}.fileRef", slot.key()),
            FieldPath::LivenessPhoto => f.write_str("livenessPhotoRef"),
        }
    }
}
