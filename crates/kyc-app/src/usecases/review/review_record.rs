use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use kyc_core::ports::{ClockPort, KycRecordRepositoryPort};
use kyc_core::review::{ReviewDecision, ReviewError};
use kyc_core::{ApplicationId, KycRecord};

#[derive(Debug, thiserror::Error)]
pub enum ReviewRecordError {
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error("record repository failed: {0}")]
    Repository(#[from] anyhow::Error),
}

/// Use case for the approve/reject buttons of the detail view.
///
/// Only records that are still `pending` or `under_review` can be decided.
pub struct ReviewKycRecord {
    records: Arc<dyn KycRecordRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl ReviewKycRecord {
    pub fn new(records: Arc<dyn KycRecordRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { records, clock }
    }

    pub fn from_ports(records: Arc<dyn KycRecordRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self::new(records, clock)
    }

    pub async fn execute(
        &self,
        id: &ApplicationId,
        decision: ReviewDecision,
    ) -> Result<KycRecord, ReviewRecordError> {
        let span = info_span!("usecase.review_record.execute", id = %id, decision = ?decision);
        async {
            let record = self
                .records
                .get(id)
                .await?
                .ok_or_else(|| ReviewError::NotFound(id.clone()))?;
            let decided = record.decide(decision, self.clock.now())?;
            self.records.update(decided.clone()).await?;
            info!(status = %decided.status, "kyc record reviewed");
            Ok(decided)
        }
        .instrument(span)
        .await
    }
}
