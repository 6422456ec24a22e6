use serde::{Deserialize, Serialize};

use super::{KycRecord, KycStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(KycStatus),
}

/// Dashboard list filter: free-text search AND status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Case-insensitive substring matched against name, id and email.
    pub search: String,
    pub status: StatusFilter,
}

impl RecordQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn matches(&self, record: &KycRecord) -> bool {
        self.matches_search(record) && self.matches_status(record)
    }

    fn matches_search(&self, record: &KycRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [record.user_name.as_str(), record.id.as_str(), record.email.as_str()]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    fn matches_status(&self, record: &KycRecord) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status == status,
        }
    }
}
