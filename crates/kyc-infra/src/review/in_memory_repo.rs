use std::collections::BTreeMap;

use anyhow::bail;
use async_trait::async_trait;
use tokio::sync::RwLock;

use kyc_core::ports::KycRecordRepositoryPort;
use kyc_core::{ApplicationId, KycRecord};

use super::seed;

/// Record registry held in memory, ordered by id.
#[derive(Default)]
pub struct InMemoryKycRecordRepository {
    records: RwLock<BTreeMap<ApplicationId, KycRecord>>,
}

impl InMemoryKycRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = KycRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
        }
    }

    /// Registry pre-filled with the demo records `KYC001`..=`KYC009`.
    pub fn seeded() -> Self {
        Self::with_records(seed::demo_records())
    }
}

#[async_trait]
impl KycRecordRepositoryPort for InMemoryKycRecordRepository {
    async fn list(&self) -> anyhow::Result<Vec<KycRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &ApplicationId) -> anyhow::Result<Option<KycRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn insert(&self, record: KycRecord) -> anyhow::Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            bail!("KYC record {} already exists", record.id);
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn insert_unless_email_taken(
        &self,
        record: KycRecord,
    ) -> anyhow::Result<Option<KycRecord>> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.values().find(|r| r.has_email(&record.email)) {
            return Ok(Some(existing.clone()));
        }
        if records.contains_key(&record.id) {
            bail!("KYC record {} already exists", record.id);
        }
        records.insert(record.id.clone(), record);
        Ok(None)
    }

    async fn update(&self, record: KycRecord) -> anyhow::Result<()> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => bail!("KYC record {} not found", record.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyc_core::KycStatus;

    #[tokio::test]
    async fn seeded_registry_lists_in_id_order() {
        let repo = InMemoryKycRecordRepository::seeded();
        let ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.into_inner())
            .collect();

        assert_eq!(ids.len(), 9);
        assert_eq!(ids.first().map(String::as_str), Some("KYC001"));
        assert_eq!(ids.last().map(String::as_str), Some("KYC009"));
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_ids_and_update_requires_existing() {
        let repo = InMemoryKycRecordRepository::seeded();
        let existing = repo
            .get(&ApplicationId::from("KYC002"))
            .await
            .unwrap()
            .unwrap();

        assert!(repo.insert(existing.clone()).await.is_err());

        let mut renamed = existing.clone();
        renamed.id = ApplicationId::from("KYC999");
        assert!(repo.update(renamed).await.is_err());

        let mut approved = existing;
        approved.status = KycStatus::Approved;
        repo.update(approved).await.unwrap();
        assert_eq!(
            repo.get(&ApplicationId::from("KYC002"))
                .await
                .unwrap()
                .unwrap()
                .status,
            KycStatus::Approved
        );
    }

    #[tokio::test]
    async fn list_orders_ids_past_three_digits_numerically() {
        let repo = InMemoryKycRecordRepository::seeded();
        let template = repo
            .get(&ApplicationId::from("KYC009"))
            .await
            .unwrap()
            .unwrap();
        for (id, email) in [("KYC1000", "a@example.com"), ("KYC101", "b@example.com")] {
            let mut record = template.clone();
            record.id = ApplicationId::from(id);
            record.email = email.into();
            repo.insert(record).await.unwrap();
        }

        let ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.into_inner())
            .collect();

        assert_eq!(&ids[8..], ["KYC009", "KYC101", "KYC1000"]);
    }

    #[tokio::test]
    async fn insert_unless_email_taken_returns_the_holder() {
        let repo = InMemoryKycRecordRepository::seeded();
        let mut record = repo
            .get(&ApplicationId::from("KYC002"))
            .await
            .unwrap()
            .unwrap();
        record.id = ApplicationId::from("KYC010");
        record.email = "PRIYA.SHARMA@example.com".into();

        let holder = repo
            .insert_unless_email_taken(record.clone())
            .await
            .unwrap()
            .expect("email already taken");
        assert_eq!(holder.id.as_str(), "KYC002");
        assert_eq!(repo.list().await.unwrap().len(), 9);

        record.email = "new.applicant@example.com".into();
        assert_eq!(repo.insert_unless_email_taken(record).await.unwrap(), None);
        assert!(repo
            .get(&ApplicationId::from("KYC010"))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn find_by_email_ignores_case() {
        let repo = InMemoryKycRecordRepository::seeded();
        let found = repo
            .find_by_email("RAJESH.KUMAR@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id.as_str(), "KYC001");
    }
}
