use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

use kyc_core::ports::WizardEventPort;
use kyc_core::{DraftKey, WizardState};

const DEFAULT_CAPACITY: usize = 64;

/// Payload published on every wizard state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStateChanged {
    pub session: DraftKey,
    pub state: WizardState,
}

/// Fans wizard state changes out to any number of subscribers.
///
/// Publishing never blocks; slow subscribers observe `Lagged`.
pub struct BroadcastWizardEventPort {
    tx: broadcast::Sender<WizardStateChanged>,
}

impl Default for BroadcastWizardEventPort {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BroadcastWizardEventPort {
    /// `capacity` is clamped to at least one slot.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WizardStateChanged> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl WizardEventPort for BroadcastWizardEventPort {
    async fn emit_wizard_state_changed(&self, session: &DraftKey, state: WizardState) {
        let event = WizardStateChanged {
            session: session.clone(),
            state,
        };
        // No subscribers is fine.
        if self.tx.send(event).is_err() {
            trace!(session = %session, "wizard state change dropped: no subscribers");
        }
    }
}
