//! # kyc-app
//!
//! Application layer of the KYC submission wizard: the controller that
//! drives the wizard state machine, and the draft and review use cases.
//! Everything here talks to the outside world through `kyc_core::ports`.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::draft::{LoadDraft, SaveDraft};
pub use usecases::review::{GetDashboardStats, GetKycRecord, ListKycRecords, ReviewKycRecord};
pub use usecases::wizard::{WizardController, WizardControllerError, WizardResponse};
