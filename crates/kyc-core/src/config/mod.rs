pub mod kyc_config;

pub use kyc_config::{DraftBackend, DraftConfig, KycConfig, LoggingConfig, SubmissionConfig};
