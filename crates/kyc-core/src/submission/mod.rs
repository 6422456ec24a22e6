//! Submission payload and sink outcome.

use serde::{Deserialize, Serialize};

use crate::ids::ApplicationId;
use crate::kyc::FieldStore;

/// A finished, validated submission handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub application_id: ApplicationId,
    pub fields: FieldStore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SubmissionOutcome {
    Accepted { application_id: ApplicationId },
    Rejected { reason: String },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }
}

/// Reason codes used by the bundled sink adapters.
pub mod reasons {
    pub const DUPLICATE_EMAIL: &str = "duplicate_email";
    pub const SINK_UNAVAILABLE: &str = "sink_unavailable";
}
