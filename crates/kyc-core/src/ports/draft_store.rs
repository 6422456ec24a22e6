use async_trait::async_trait;
use thiserror::Error;

use crate::draft::Draft;
use crate::ids::DraftKey;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("draft store failed: {0}")]
    Store(String),

    #[error("draft data corrupt: {0}")]
    Corrupt(String),
}

/// Durable storage for drafts, keyed by session or user.
///
/// Deletion and schema migration belong to the implementation, not the core.
#[async_trait]
pub trait DraftStorePort: Send + Sync {
    /// Store a draft. Overwrites any draft already saved under `key`.
    async fn save(&self, key: &DraftKey, draft: &Draft) -> Result<(), DraftStoreError>;

    /// Load the draft saved under `key`, if any.
    async fn load(&self, key: &DraftKey) -> Result<Option<Draft>, DraftStoreError>;
}
