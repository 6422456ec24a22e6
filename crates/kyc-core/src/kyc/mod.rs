//! KYC form domain: the field store and everything addressing into it.

mod doc_type;
mod field_path;
mod field_store;
mod update;

pub use doc_type::{DocType, ParseDocTypeError};
pub use field_path::{AddressField, AddressKind, DocSlot, FieldPath, IdentityField};
pub use field_store::{Address, DocumentSelection, FieldStore, Identity};
pub use update::FieldUpdate;
