use std::sync::Arc;

use kyc_core::ports::KycRecordRepositoryPort;
use kyc_core::review::DashboardStats;

/// Use case for the dashboard cards.
pub struct GetDashboardStats {
    records: Arc<dyn KycRecordRepositoryPort>,
}

impl GetDashboardStats {
    pub fn new(records: Arc<dyn KycRecordRepositoryPort>) -> Self {
        Self { records }
    }

    pub fn from_ports(records: Arc<dyn KycRecordRepositoryPort>) -> Self {
        Self::new(records)
    }

    pub async fn execute(&self) -> anyhow::Result<DashboardStats> {
        let records = self.records.list().await?;
        Ok(DashboardStats::from_records(&records))
    }
}
