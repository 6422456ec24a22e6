use kyc_core::config::DraftBackend;
use kyc_core::kyc::{AddressField, AddressKind, DocSlot, IdentityField};
use kyc_core::review::{RecordQuery, ReviewDecision, StatusFilter};
use kyc_core::{ApplicationId, DraftKey, FieldUpdate, KycConfig, KycStatus, WizardStatus};
use kycflow::build_runtime;
use tempfile::TempDir;

fn updates() -> Vec<FieldUpdate> {
    let mut updates = vec![
        FieldUpdate::identity(IdentityField::FirstName, "Rohan"),
        FieldUpdate::identity(IdentityField::LastName, "Gupta"),
        FieldUpdate::identity(IdentityField::Email, "rohan.gupta@example.com"),
        FieldUpdate::identity(IdentityField::Phone, "+91 90000 00000"),
        FieldUpdate::identity(IdentityField::DateOfBirth, "1985-11-30"),
        FieldUpdate::identity_photo("upload://rohan"),
    ];
    for kind in [AddressKind::Permanent, AddressKind::Corporate] {
        for field in AddressField::ALL {
            updates.push(FieldUpdate::address(kind, field, "Pune"));
        }
    }
    updates.push(FieldUpdate::doc_file(DocSlot::Permanent, "upload://dl"));
    updates.push(FieldUpdate::doc_file(DocSlot::Corporate, "upload://voter"));
    updates.push(FieldUpdate::liveness_photo("upload://selfie"));
    updates
}

#[tokio::test]
async fn runtime_test_submission_reaches_review_dashboard() {
    let mut config = KycConfig::default();
    config.drafts.backend = DraftBackend::Memory;
    let runtime = build_runtime(&config).expect("build runtime");
    let usecases = runtime.usecases();

    let wizard = usecases.wizard(DraftKey::from("rohan"));
    for update in updates() {
        wizard.update_field(update).await.expect("update");
    }
    for _ in 0..4 {
        assert!(wizard.next().await.expect("next").ok());
    }
    let submitted = wizard.submit().await.expect("submit");
    assert_eq!(submitted.state.status, WizardStatus::Submitted);
    let id = submitted.state.application_id.expect("application id");
    assert_eq!(id, ApplicationId::from("KYC010"));

    let found = usecases
        .list_kyc_records()
        .execute(&RecordQuery::new("rohan", StatusFilter::Only(KycStatus::Pending)))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let approved = usecases
        .review_kyc_record()
        .execute(&id, ReviewDecision::Approve)
        .await
        .expect("approve");
    assert_eq!(approved.status, KycStatus::Approved);

    let detail = usecases
        .get_kyc_record()
        .execute(&id)
        .await
        .unwrap()
        .expect("record exists");
    assert!(detail.reviewed_at.is_some());

    let stats = usecases.dashboard_stats().execute().await.unwrap();
    assert_eq!(stats.total, 10);
    assert_eq!(stats.approved, 5);
    assert_eq!(stats.approval_rate, 50);
}

#[tokio::test]
async fn runtime_test_file_drafts_survive_a_new_runtime() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = KycConfig::default();
    config.drafts.dir = temp_dir.path().join("drafts");

    let first = build_runtime(&config).expect("first runtime");
    let wizard = first.usecases().wizard(DraftKey::from("rohan"));
    for update in updates().into_iter().take(6) {
        wizard.update_field(update).await.unwrap();
    }
    wizard.next().await.unwrap();
    let saved = wizard.save_draft().await.expect("save draft");

    let second = build_runtime(&config).expect("second runtime");
    let resumed = second.usecases().wizard(DraftKey::from("rohan"));
    let draft = resumed.load_draft().await.unwrap().expect("draft on disk");
    let state = resumed.resume(draft).await.unwrap();

    assert_eq!(state.current_step, saved.current_step);
    assert_eq!(resumed.fields().await, saved.field_store);
}
