//! Tracing subscriber setup.
//!
//! - `RUST_LOG` overrides everything; otherwise `logging.level` from the
//!   config, otherwise `debug` in debug builds and `info` in release builds.
//! - stdout always; a non-blocking file writer when `logging.dir` is set.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

use kyc_core::config::LoggingConfig;

pub const LOG_FILE_NAME: &str = "kycflow.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default directives when `RUST_LOG` is unset.
fn build_filter_directives(is_dev: bool, level: Option<&str>) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![level.unwrap_or(crate_level).to_string()];
    // A configured level applies to our crates too.
    if level.is_none() {
        for krate in ["kyc_core", "kyc_app", "kyc_infra", "kycflow"] {
            directives.push(format!("{krate}={crate_level}"));
        }
    }
    directives
}

/// Install the global subscriber. Call once, before any logging.
///
/// Fails if a subscriber is already registered or `RUST_LOG` is malformed.
pub fn init_tracing_subscriber(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), config.level.as_deref());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match config.dir.as_deref().map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_defaults_to_debug_for_own_crates() {
        let directives = build_filter_directives(true, None);
        assert_eq!(directives[0], "debug");
        assert!(directives.contains(&"kyc_app=debug".to_string()));
    }

    #[test]
    fn release_defaults_to_info() {
        let directives = build_filter_directives(false, None);
        assert_eq!(directives[0], "info");
        assert!(directives.contains(&"kyc_infra=info".to_string()));
    }

    #[test]
    fn configured_level_replaces_defaults() {
        assert_eq!(build_filter_directives(true, Some("warn")), vec!["warn".to_string()]);
    }

    #[test]
    fn file_writer_creates_log_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().join("logs");

        // The guard slot is process-wide; a second call in the same test
        // binary is the only way this can fail.
        let _ = build_file_writer(&dir);

        assert!(dir.is_dir());
    }
}
