//! Application dependency grouping.
//!
//! This is NOT a builder and has no behavior; it only bundles the ports
//! use cases are constructed from.

use std::sync::Arc;

use kyc_core::ports::{
    ApplicationIdPort, ClockPort, DraftStorePort, KycRecordRepositoryPort, SubmissionSinkPort,
    WizardEventPort,
};

/// Ports required by the wizard and review use cases.
#[derive(Clone)]
pub struct AppDeps {
    pub draft_store: Arc<dyn DraftStorePort>,
    pub submission_sink: Arc<dyn SubmissionSinkPort>,
    pub application_ids: Arc<dyn ApplicationIdPort>,
    pub records: Arc<dyn KycRecordRepositoryPort>,
    pub wizard_events: Arc<dyn WizardEventPort>,
    pub clock: Arc<dyn ClockPort>,
}
