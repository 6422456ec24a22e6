//! # kyc-core
//!
//! Core domain models and business logic for the KYC submission wizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod draft;
pub mod ids;
pub mod kyc;
pub mod ports;
pub mod review;
pub mod submission;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::KycConfig;
pub use draft::Draft;
pub use ids::{ApplicationId, ArtifactRef, DraftKey};
pub use kyc::{Address, DocType, DocumentSelection, FieldPath, FieldStore, FieldUpdate, Identity};
pub use review::{KycRecord, KycStatus};
pub use submission::{SubmissionOutcome, SubmissionPayload};
pub use wizard::{StepIndex, ValidationReport, WizardError, WizardState, WizardStatus};
