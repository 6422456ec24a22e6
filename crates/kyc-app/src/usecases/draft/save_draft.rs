use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use kyc_core::ports::{ClockPort, DraftStoreError, DraftStorePort};
use kyc_core::{Draft, DraftKey, FieldStore, StepIndex};

/// Use case for persisting the current wizard data as a draft.
///
/// Stamps the draft with the clock and overwrites whatever was stored under
/// the key before.
pub struct SaveDraft {
    draft_store: Arc<dyn DraftStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveDraft {
    pub fn new(draft_store: Arc<dyn DraftStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { draft_store, clock }
    }

    pub fn from_ports(draft_store: Arc<dyn DraftStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self::new(draft_store, clock)
    }

    pub async fn execute(
        &self,
        key: &DraftKey,
        fields: FieldStore,
        current_step: StepIndex,
    ) -> Result<Draft, DraftStoreError> {
        let span = info_span!("usecase.save_draft.execute", key = %key, step = %current_step);
        async {
            let draft = Draft::new(fields, current_step, self.clock.now());
            self.draft_store.save(key, &draft).await?;
            info!(saved_at = %draft.saved_at, "draft saved");
            Ok(draft)
        }
        .instrument(span)
        .await
    }
}
