use std::sync::Arc;

use tracing::debug;

use kyc_core::ports::KycRecordRepositoryPort;
use kyc_core::review::RecordQuery;
use kyc_core::KycRecord;

/// Use case for the dashboard table: search text AND status filter.
pub struct ListKycRecords {
    records: Arc<dyn KycRecordRepositoryPort>,
}

impl ListKycRecords {
    pub fn new(records: Arc<dyn KycRecordRepositoryPort>) -> Self {
        Self { records }
    }

    pub fn from_ports(records: Arc<dyn KycRecordRepositoryPort>) -> Self {
        Self::new(records)
    }

    pub async fn execute(&self, query: &RecordQuery) -> anyhow::Result<Vec<KycRecord>> {
        let records = self.records.list().await?;
        let total = records.len();
        let matched: Vec<KycRecord> = records.into_iter().filter(|r| query.matches(r)).collect();
        debug!(total, matched = matched.len(), search = %query.search, "kyc records listed");
        Ok(matched)
    }
}
