use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity document kinds accepted for address proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    #[default]
    Aadhar,
    Dl,
    Passport,
    VoterId,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document type: {0}")]
pub struct ParseDocTypeError(pub String);

impl DocType {
    pub const ALL: [DocType; 4] = [
        DocType::Aadhar,
        DocType::Dl,
        DocType::Passport,
        DocType::VoterId,
    ];

    /// Wire code, as used in serialized drafts and payloads.
    pub fn code(self) -> &'static str {
        match self {
            DocType::Aadhar => "aadhar",
            DocType::Dl => "dl",
            DocType::Passport => "passport",
            DocType::VoterId => "voter_id",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            DocType::Aadhar => "Aadhar Card",
            DocType::Dl => "Driving License",
            DocType::Passport => "Passport",
            DocType::VoterId => "Voter ID",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DocType {
    type Err = ParseDocTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .into_iter()
            .find(|doc_type| doc_type.code() == s)
            .ok_or_else(|| ParseDocTypeError(s.to_string()))
    }
}
