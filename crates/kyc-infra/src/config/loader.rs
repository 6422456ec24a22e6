//! Layered configuration loader.
//!
//! Sources, lowest precedence first:
//! 1. `KycConfig::default()`
//! 2. an optional TOML file
//! 3. `KYC_`-prefixed environment variables, `__` between nested keys
//!    (`KYC_SUBMISSION__ID_PREFIX=APP`)
//!
//! Pure data loading: no validation beyond what deserialization enforces.

use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};

use kyc_core::KycConfig;

pub const ENV_PREFIX: &str = "KYC";

pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<KycConfig> {
    load_config_with_env(config_path, Environment::with_prefix(ENV_PREFIX))
}

fn load_config_with_env(
    config_path: Option<&Path>,
    environment: Environment,
) -> anyhow::Result<KycConfig> {
    let mut builder = Config::builder().add_source(
        Config::try_from(&KycConfig::default()).context("Failed to encode default config")?,
    );

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }

    builder = builder.add_source(
        environment
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .context("Failed to build config")?
        .try_deserialize()
        .with_context(|| match config_path {
            Some(path) => format!("Failed to parse config: {}", path.display()),
            None => "Failed to parse config".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyc_core::config::DraftBackend;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_without_file() {
        let config = load_config_with_env(None, no_env()).unwrap();
        assert_eq!(config, KycConfig::default());
        assert_eq!(config.submission.id_prefix, "KYC");
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [drafts]
            backend = "memory"
            dir = "/var/lib/kyc/drafts"

            [logging]
            level = "debug"
            "#
        )
        .unwrap();

        let config = load_config_with_env(Some(file.path()), no_env()).unwrap();

        assert_eq!(config.drafts.backend, DraftBackend::Memory);
        assert_eq!(config.drafts.dir, PathBuf::from("/var/lib/kyc/drafts"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.submission.seed_records);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            load_config_with_env(Some(Path::new("/nonexistent/kycflow.toml")), no_env()).unwrap();
        assert_eq!(config, KycConfig::default());
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[submission]\nid_prefix = \"FILE\"").unwrap();
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("KYC_SUBMISSION__ID_PREFIX".to_string(), "APP".to_string()),
            ("KYC_SUBMISSION__SEED_RECORDS".to_string(), "false".to_string()),
        ])));

        let config = load_config_with_env(Some(file.path()), env).unwrap();

        assert_eq!(config.submission.id_prefix, "APP");
        assert!(!config.submission.seed_records);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[drafts\nbackend = ").unwrap();
        assert!(load_config_with_env(Some(file.path()), no_env()).is_err());
    }
}
