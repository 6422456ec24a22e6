use std::sync::Arc;

use kyc_app::{
    AppDeps, GetDashboardStats, GetKycRecord, ListKycRecords, ReviewKycRecord, WizardController,
};
use kyc_core::DraftKey;
use kyc_infra::BroadcastWizardEventPort;

/// Runtime holding all wired dependencies.
///
/// Use cases are reached through [`KycRuntime::usecases`].
pub struct KycRuntime {
    pub deps: AppDeps,
    events: Arc<BroadcastWizardEventPort>,
}

impl KycRuntime {
    pub fn new(deps: AppDeps, events: Arc<BroadcastWizardEventPort>) -> Self {
        Self { deps, events }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    /// Wizard state changes of every session started from this runtime.
    pub fn wizard_events(&self) -> &BroadcastWizardEventPort {
        &self.events
    }
}

/// Use case accessor for [`KycRuntime`].
pub struct UseCases<'a> {
    runtime: &'a KycRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a KycRuntime) -> Self {
        Self { runtime }
    }

    /// A fresh wizard session. Call `load_draft` / `resume` on it to pick up
    /// a saved draft for the same key.
    pub fn wizard(&self, session: DraftKey) -> WizardController {
        WizardController::from_deps(session, &self.runtime.deps)
    }

    pub fn list_kyc_records(&self) -> ListKycRecords {
        ListKycRecords::from_ports(self.runtime.deps.records.clone())
    }

    pub fn get_kyc_record(&self) -> GetKycRecord {
        GetKycRecord::from_ports(self.runtime.deps.records.clone())
    }

    pub fn review_kyc_record(&self) -> ReviewKycRecord {
        ReviewKycRecord::from_ports(
            self.runtime.deps.records.clone(),
            self.runtime.deps.clock.clone(),
        )
    }

    pub fn dashboard_stats(&self) -> GetDashboardStats {
        GetDashboardStats::from_ports(self.runtime.deps.records.clone())
    }
}
