use std::sync::Arc;

use tracing::debug;

use kyc_core::ports::{DraftStoreError, DraftStorePort};
use kyc_core::{Draft, DraftKey};

/// Use case for reading a previously saved draft, if any.
pub struct LoadDraft {
    draft_store: Arc<dyn DraftStorePort>,
}

impl LoadDraft {
    pub fn new(draft_store: Arc<dyn DraftStorePort>) -> Self {
        Self { draft_store }
    }

    pub fn from_ports(draft_store: Arc<dyn DraftStorePort>) -> Self {
        Self::new(draft_store)
    }

    pub async fn execute(&self, key: &DraftKey) -> Result<Option<Draft>, DraftStoreError> {
        let draft = self.draft_store.load(key).await?;
        debug!(key = %key, found = draft.is_some(), "draft lookup");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use kyc_core::{FieldStore, StepIndex};

    struct SingleDraftStore {
        key: DraftKey,
        draft: Draft,
    }

    #[async_trait]
    impl DraftStorePort for SingleDraftStore {
        async fn save(&self, _key: &DraftKey, _draft: &Draft) -> Result<(), DraftStoreError> {
            Ok(())
        }

        async fn load(&self, key: &DraftKey) -> Result<Option<Draft>, DraftStoreError> {
            Ok((key == &self.key).then(|| self.draft.clone()))
        }
    }

    #[tokio::test]
    async fn load_draft_returns_stored_draft_for_matching_key() {
        let draft = Draft::new(FieldStore::default(), StepIndex::FIRST, Utc::now());
        let store = Arc::new(SingleDraftStore {
            key: DraftKey::from("user-7"),
            draft: draft.clone(),
        });
        let use_case = LoadDraft::new(store);

        assert_eq!(use_case.execute(&DraftKey::from("user-7")).await.unwrap(), Some(draft));
        assert_eq!(use_case.execute(&DraftKey::from("user-8")).await.unwrap(), None);
    }
}
