//! Configuration entry point.
//!
//! Resolves which file to read and hands off to the layered loader in
//! `kyc-infra`. No validation here: the loaded values are facts.

use std::path::{Path, PathBuf};

use anyhow::Context;
use kyc_core::KycConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "KYC_CONFIG";

pub const DEFAULT_CONFIG_FILE: &str = "kycflow.toml";

/// Load configuration from `path`, or from `$KYC_CONFIG`, or from
/// `kycflow.toml` in the working directory. A missing file means defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<KycConfig> {
    let path = resolve_config_path(path, std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
    kyc_infra::config::load_config(Some(&path))
        .with_context(|| format!("Failed to load config: {}", path.display()))
}

fn resolve_config_path(explicit: Option<&Path>, from_env: Option<PathBuf>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or(from_env)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
