use std::sync::Arc;

use tokio::sync::Mutex;

use kyc_core::{FieldStore, SubmissionPayload, WizardState};

/// Shared wizard context: state, field store and dispatch lock.
///
/// ## Lock Ordering
/// Acquire `dispatch_lock` first, then any of the data locks.
/// - `dispatch_lock`: held for a whole controller operation, including sink
///   and draft I/O, so concurrent operations queue behind it.
/// - `state`, `fields`, `submission`: short-lived, also taken by readers.
#[derive(Clone)]
pub struct WizardContext {
    state: Arc<Mutex<WizardState>>,
    fields: Arc<Mutex<FieldStore>>,
    /// Snapshot handed to the sink on the last submit attempt.
    submission: Arc<Mutex<Option<SubmissionPayload>>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardState::default(), FieldStore::default())
    }
}

impl WizardContext {
    pub fn new(state: WizardState, fields: FieldStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            fields: Arc::new(Mutex::new(fields)),
            submission: Arc::new(Mutex::new(None)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Only call while holding `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        *self.state.lock().await = state;
    }

    pub async fn get_fields(&self) -> FieldStore {
        self.fields.lock().await.clone()
    }

    /// Only call while holding `dispatch_lock`.
    pub async fn set_fields(&self, fields: FieldStore) {
        *self.fields.lock().await = fields;
    }

    pub async fn get_submission(&self) -> Option<SubmissionPayload> {
        self.submission.lock().await.clone()
    }

    pub async fn set_submission(&self, payload: Option<SubmissionPayload>) {
        *self.submission.lock().await = payload;
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyc_core::{FieldUpdate, WizardStatus};
    use kyc_core::kyc::IdentityField;

    #[tokio::test]
    async fn clones_share_the_same_state() {
        let context = WizardContext::default();
        let other = context.clone();

        let _guard = context.acquire_dispatch_lock().await;
        context
            .set_state(WizardState {
                status: WizardStatus::Failed,
                ..WizardState::default()
            })
            .await;
        context
            .set_fields(FieldStore::default().apply(FieldUpdate::identity(IdentityField::FirstName, "Asha")))
            .await;

        assert_eq!(other.get_state().await.status, WizardStatus::Failed);
        assert_eq!(other.get_fields().await.identity.first_name, "Asha");
    }
}
