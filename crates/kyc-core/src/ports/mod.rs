//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core never performs I/O itself;
//! every external collaborator of the wizard sits behind one of these traits.

mod application_id;
mod clock;
mod draft_store;
mod record_repository;
mod submission_sink;
mod wizard_event;

pub use application_id::ApplicationIdPort;
pub use clock::ClockPort;
pub use draft_store::{DraftStoreError, DraftStorePort};
pub use record_repository::KycRecordRepositoryPort;
pub use submission_sink::SubmissionSinkPort;
pub use wizard_event::WizardEventPort;
