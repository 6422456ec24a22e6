use serde::{Deserialize, Serialize};

use super::{KycRecord, KycStatus};

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub under_review: usize,
    pub rejected: usize,
    /// Rounded percentage of approved records; `0` when there are none.
    pub approval_rate: u8,
}

impl DashboardStats {
    pub fn from_records(records: &[KycRecord]) -> Self {
        let count = |status: KycStatus| records.iter().filter(|r| r.status == status).count();
        let total = records.len();
        let approved = count(KycStatus::Approved);
        let approval_rate = if total == 0 {
            0
        } else {
            (approved as f64 / total as f64 * 100.0).round() as u8
        };
        Self {
            total,
            approved,
            pending: count(KycStatus::Pending),
            under_review: count(KycStatus::UnderReview),
            rejected: count(KycStatus::Rejected),
            approval_rate,
        }
    }
}
