use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::ApplicationId;
use crate::kyc::DocType;
use crate::submission::SubmissionPayload;

/// Review status of a submitted application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown KYC status: {0}")]
pub struct ParseKycStatusError(pub String);

impl KycStatus {
    pub const ALL: [KycStatus; 4] = [
        KycStatus::Pending,
        KycStatus::UnderReview,
        KycStatus::Approved,
        KycStatus::Rejected,
    ];

    pub fn code(self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::UnderReview => "under_review",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
        }
    }

    /// Whether a reviewer may still approve or reject.
    pub fn is_open(self) -> bool {
        matches!(self, KycStatus::Pending | KycStatus::UnderReview)
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for KycStatus {
    type Err = ParseKycStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KycStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| ParseKycStatusError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("KYC record not found: {0}")]
    NotFound(ApplicationId),
    #[error("KYC record {id} is already {status}")]
    AlreadyDecided { id: ApplicationId, status: KycStatus },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRecord {
    pub id: ApplicationId,
    pub user_name: String,
    pub email: String,
    pub status: KycStatus,
    pub document_type: DocType,
    pub completion_percentage: u8,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl KycRecord {
    /// A freshly accepted submission awaiting review.
    pub fn from_submission(payload: &SubmissionPayload, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: payload.application_id.clone(),
            user_name: payload.fields.identity.full_name(),
            email: payload.fields.identity.email.trim().to_string(),
            status: KycStatus::Pending,
            document_type: payload.fields.permanent_doc.doc_type,
            completion_percentage: 100,
            submitted_at,
            reviewed_at: None,
        }
    }

    /// Applies a reviewer decision, returning the updated record.
    pub fn decide(
        &self,
        decision: ReviewDecision,
        reviewed_at: DateTime<Utc>,
    ) -> Result<KycRecord, ReviewError> {
        if !self.status.is_open() {
            return Err(ReviewError::AlreadyDecided {
                id: self.id.clone(),
                status: self.status,
            });
        }
        let status = match decision {
            ReviewDecision::Approve => KycStatus::Approved,
            ReviewDecision::Reject => KycStatus::Rejected,
        };
        Ok(KycRecord {
            status,
            reviewed_at: Some(reviewed_at),
            ..self.clone()
        })
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
