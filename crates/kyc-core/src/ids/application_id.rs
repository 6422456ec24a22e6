use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::id_macro::string_id;

/// KYC application identifier.
/// Format: "{prefix}{sequence:03}", e.g. `KYC010`.
///
/// Ids order by prefix, then by numeric sequence, so `KYC101 < KYC1000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

string_id!(ApplicationId);

impl ApplicationId {
    /// Builds an id from a prefix and a sequence number, zero-padded to three digits.
    pub fn from_sequence(prefix: &str, sequence: u32) -> Self {
        Self(format!("{prefix}{sequence:03}"))
    }

    /// (prefix, significant digit count, significant digits)
    fn sequence_key(&self) -> (&str, usize, &str) {
        let prefix_len = self.0.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        let (prefix, digits) = self.0.split_at(prefix_len);
        let digits = digits.trim_start_matches('0');
        (prefix, digits.len(), digits)
    }
}

impl Ord for ApplicationId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sequence_key()
            .cmp(&other.sequence_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ApplicationId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
