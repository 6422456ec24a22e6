//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Plain data; loading and layering happen in the infrastructure layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KycConfig {
    pub drafts: DraftConfig,
    pub submission: SubmissionConfig,
    pub logging: LoggingConfig,
}

/// Where drafts are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    pub backend: DraftBackend,
    /// Directory for file-backed drafts. Empty means the platform data directory.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Prefix of generated application ids.
    pub id_prefix: String,
    /// Populate the record registry with the demo records.
    pub seed_records: bool,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            id_prefix: "KYC".to_string(),
            seed_records: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info`.
    pub level: Option<String>,
    /// When set, logs are also written to `kycflow.log` in this directory.
    pub dir: Option<PathBuf>,
}
