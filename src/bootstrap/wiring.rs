//! Dependency wiring.
//!
//! Turns a `KycConfig` into concrete adapters behind the ports in `AppDeps`.

use std::sync::Arc;

use tracing::info;

use kyc_app::AppDeps;
use kyc_core::config::{DraftBackend, DraftConfig};
use kyc_core::ports::{ClockPort, DraftStorePort, KycRecordRepositoryPort};
use kyc_core::KycConfig;
use kyc_infra::review::seed::{self, LAST_SEEDED_SEQUENCE};
use kyc_infra::{
    BroadcastWizardEventPort, FileDraftRepository, InMemoryDraftRepository,
    InMemoryKycRecordRepository, InMemorySubmissionSink, SequentialApplicationIds, SystemClock,
};

use super::runtime::KycRuntime;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Draft store initialization failed: {0}")]
    DraftStoreInit(String),
}

fn create_draft_store(config: &DraftConfig) -> WiringResult<Arc<dyn DraftStorePort>> {
    match config.backend {
        DraftBackend::Memory => Ok(Arc::new(InMemoryDraftRepository::new())),
        DraftBackend::File if config.dir.as_os_str().is_empty() => {
            let repo = FileDraftRepository::with_defaults()
                .map_err(|e| WiringError::DraftStoreInit(format!("{e:#}")))?;
            Ok(Arc::new(repo))
        }
        DraftBackend::File => Ok(Arc::new(FileDraftRepository::new(config.dir.clone()))),
    }
}

/// Build every adapter and bundle them as `AppDeps`, together with the
/// broadcast port so the caller can subscribe to wizard state changes.
pub fn wire_dependencies(
    config: &KycConfig,
) -> WiringResult<(AppDeps, Arc<BroadcastWizardEventPort>)> {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let (records, last_sequence) = if config.submission.seed_records {
        (InMemoryKycRecordRepository::with_records(seed::demo_records()), LAST_SEEDED_SEQUENCE)
    } else {
        (InMemoryKycRecordRepository::new(), 0)
    };
    let records: Arc<dyn KycRecordRepositoryPort> = Arc::new(records);

    let events = Arc::new(BroadcastWizardEventPort::default());

    let deps = AppDeps {
        draft_store: create_draft_store(&config.drafts)?,
        submission_sink: Arc::new(InMemorySubmissionSink::new(records.clone(), clock.clone())),
        application_ids: Arc::new(SequentialApplicationIds::starting_after(
            config.submission.id_prefix.clone(),
            last_sequence,
        )),
        records,
        wizard_events: events.clone(),
        clock,
    };

    info!(
        draft_backend = ?config.drafts.backend,
        seeded = config.submission.seed_records,
        id_prefix = %config.submission.id_prefix,
        "dependencies wired"
    );

    Ok((deps, events))
}

pub fn build_runtime(config: &KycConfig) -> WiringResult<KycRuntime> {
    let (deps, events) = wire_dependencies(config)?;
    Ok(KycRuntime::new(deps, events))
}
