pub mod config;
pub mod draft;
pub mod events;
pub mod fs;
pub mod ids;
pub mod review;
pub mod submission;
pub mod time;

pub use draft::{FileDraftRepository, InMemoryDraftRepository};
pub use events::BroadcastWizardEventPort;
pub use ids::SequentialApplicationIds;
pub use review::InMemoryKycRecordRepository;
pub use submission::InMemorySubmissionSink;
pub use time::SystemClock;
