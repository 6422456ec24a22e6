use serde::{Deserialize, Serialize};

use super::{AddressField, AddressKind, DocSlot, DocType, FieldPath, IdentityField};
use crate::ids::ArtifactRef;

/// A named change to one field of a [`FieldStore`](super::FieldStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FieldUpdate {
    Identity {
        field: IdentityField,
        value: String,
    },
    IdentityPhoto {
        photo_ref: Option<ArtifactRef>,
    },
    Address {
        kind: AddressKind,
        field: AddressField,
        value: String,
    },
    DocType {
        slot: DocSlot,
        doc_type: DocType,
    },
    DocFile {
        slot: DocSlot,
        file_ref: Option<ArtifactRef>,
    },
    LivenessPhoto {
        photo_ref: Option<ArtifactRef>,
    },
}

impl FieldUpdate {
    pub fn identity(field: IdentityField, value: impl Into<String>) -> Self {
        FieldUpdate::Identity {
            field,
            value: value.into(),
        }
    }

    pub fn address(kind: AddressKind, field: AddressField, value: impl Into<String>) -> Self {
        FieldUpdate::Address {
            kind,
            field,
            value: value.into(),
        }
    }

    pub fn identity_photo(photo_ref: impl Into<ArtifactRef>) -> Self {
        FieldUpdate::IdentityPhoto {
            photo_ref: Some(photo_ref.into()),
        }
    }

    pub fn doc_type(slot: DocSlot, doc_type: DocType) -> Self {
        FieldUpdate::DocType { slot, doc_type }
    }

    pub fn doc_file(slot: DocSlot, file_ref: impl Into<ArtifactRef>) -> Self {
        FieldUpdate::DocFile {
            slot,
            file_ref: Some(file_ref.into()),
        }
    }

    pub fn liveness_photo(photo_ref: impl Into<ArtifactRef>) -> Self {
        FieldUpdate::LivenessPhoto {
            photo_ref: Some(photo_ref.into()),
        }
    }

    /// The field this update writes to.
    pub fn path(&self) -> FieldPath {
        match self {
            FieldUpdate::Identity { field, .. } => FieldPath::Identity(*field),
            FieldUpdate::IdentityPhoto { .. } => FieldPath::IdentityPhoto,
            FieldUpdate::Address { kind, field, .. } => FieldPath::Address(*kind, *field),
            FieldUpdate::DocType { slot, .. } => FieldPath::DocType(*slot),
            FieldUpdate::DocFile { slot, .. } => FieldPath::DocFile(*slot),
            FieldUpdate::LivenessPhoto { .. } => FieldPath::LivenessPhoto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_matches_the_written_field() {
        assert_eq!(
            FieldUpdate::doc_file(DocSlot::Corporate, "upload://doc").path(),
            FieldPath::DocFile(DocSlot::Corporate)
        );
        assert_eq!(
            FieldUpdate::LivenessPhoto { photo_ref: None }.path(),
            FieldPath::LivenessPhoto
        );
    }

    #[test]
    fn serializes_with_operation_tag() {
        let update = FieldUpdate::address(AddressKind::Permanent, AddressField::ZipCode, "560001");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["op"], "address");
        assert_eq!(json["kind"], "permanent");
        assert_eq!(json["field"], "zipCode");
        assert_eq!(json["value"], "560001");
    }
}
