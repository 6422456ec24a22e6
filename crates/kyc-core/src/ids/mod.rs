//! Identifier newtypes used across the KYC domain.

mod application_id;
mod id_macro;

pub use application_id::ApplicationId;

use id_macro::string_id;
use serde::{Deserialize, Serialize};

/// Opaque key a draft is stored under (session or user identifier).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftKey(String);

/// Opaque handle to an uploaded artifact (photo, document scan).
///
/// Produced by an external upload collaborator. The core only ever checks
/// whether a reference is present; it never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(String);

string_id!(DraftKey, random);
string_id!(ArtifactRef, random);
