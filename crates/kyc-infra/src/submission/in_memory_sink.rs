use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use kyc_core::ports::{ClockPort, KycRecordRepositoryPort, SubmissionSinkPort};
use kyc_core::submission::reasons;
use kyc_core::{KycRecord, SubmissionOutcome, SubmissionPayload};

/// Mock backend: files accepted submissions into the record registry as
/// `pending` records.
///
/// Rejects a submission whose email already has a record.
pub struct InMemorySubmissionSink {
    records: Arc<dyn KycRecordRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl InMemorySubmissionSink {
    pub fn new(records: Arc<dyn KycRecordRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { records, clock }
    }
}

#[async_trait]
impl SubmissionSinkPort for InMemorySubmissionSink {
    async fn submit(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionOutcome> {
        let record = KycRecord::from_submission(&payload, self.clock.now());
        if let Some(existing) = self.records.insert_unless_email_taken(record).await? {
            warn!(
                application_id = %payload.application_id,
                existing = %existing.id,
                "submission rejected: duplicate email"
            );
            return Ok(SubmissionOutcome::Rejected {
                reason: reasons::DUPLICATE_EMAIL.to_string(),
            });
        }
        info!(application_id = %payload.application_id, "submission filed for review");

        Ok(SubmissionOutcome::Accepted {
            application_id: payload.application_id,
        })
    }
}
