use std::sync::Arc;

use kyc_core::ports::KycRecordRepositoryPort;
use kyc_core::{ApplicationId, KycRecord};

/// Use case for the record detail view. `None` means "record not found".
pub struct GetKycRecord {
    records: Arc<dyn KycRecordRepositoryPort>,
}

impl GetKycRecord {
    pub fn new(records: Arc<dyn KycRecordRepositoryPort>) -> Self {
        Self { records }
    }

    pub fn from_ports(records: Arc<dyn KycRecordRepositoryPort>) -> Self {
        Self::new(records)
    }

    pub async fn execute(&self, id: &ApplicationId) -> anyhow::Result<Option<KycRecord>> {
        self.records.get(id).await
    }
}
