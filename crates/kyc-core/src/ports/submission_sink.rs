use async_trait::async_trait;

use crate::submission::{SubmissionOutcome, SubmissionPayload};

/// Acceptor of finished submissions (a backend or a mock).
///
/// `Err` means the sink could not be reached; the wizard treats it like a
/// rejection so the caller can retry. Timeouts are the implementation's
/// concern and must eventually resolve to one or the other.
#[async_trait]
pub trait SubmissionSinkPort: Send + Sync {
    async fn submit(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionOutcome>;
}
