use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use kyc_core::ports::{DraftStoreError, DraftStorePort};
use kyc_core::{Draft, DraftKey};

/// Process-local draft store. Drafts are lost on exit.
#[derive(Default)]
pub struct InMemoryDraftRepository {
    drafts: RwLock<HashMap<DraftKey, Draft>>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftStorePort for InMemoryDraftRepository {
    async fn save(&self, key: &DraftKey, draft: &Draft) -> Result<(), DraftStoreError> {
        self.drafts.write().await.insert(key.clone(), draft.clone());
        Ok(())
    }

    async fn load(&self, key: &DraftKey) -> Result<Option<Draft>, DraftStoreError> {
        Ok(self.drafts.read().await.get(key).cloned())
    }
}
