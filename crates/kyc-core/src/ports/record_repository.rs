use async_trait::async_trait;

use crate::ids::ApplicationId;
use crate::review::KycRecord;

#[async_trait]
pub trait KycRecordRepositoryPort: Send + Sync {
    /// All records, ordered by id.
    async fn list(&self) -> anyhow::Result<Vec<KycRecord>>;

    async fn get(&self, id: &ApplicationId) -> anyhow::Result<Option<KycRecord>>;

    /// Insert a new record. Fails if the id is already taken.
    async fn insert(&self, record: KycRecord) -> anyhow::Result<()>;

    /// Insert a new record unless another record already has its email.
    ///
    /// Returns the record holding the email instead of inserting. The check
    /// and the insert happen under one write, so two concurrent calls with the
    /// same email can never both insert.
    async fn insert_unless_email_taken(
        &self,
        record: KycRecord,
    ) -> anyhow::Result<Option<KycRecord>>;

    /// Replace an existing record. Fails if the id is unknown.
    async fn update(&self, record: KycRecord) -> anyhow::Result<()>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<KycRecord>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|record| record.has_email(email)))
    }
}
