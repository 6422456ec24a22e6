use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application data root.
///
/// - macOS: ~/Library/Application Support/kycflow
/// - Windows: %APPDATA%\kycflow
/// - Linux: $XDG_DATA_HOME/kycflow or ~/.local/share/kycflow
///
/// Does not create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("kycflow"))
}

/// Default location of file-backed drafts.
pub fn drafts_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("drafts"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_dir_lives_under_app_data_dir() {
        let (Ok(root), Ok(drafts)) = (app_data_dir(), drafts_dir()) else {
            // No data dir on this host (e.g. a bare container without HOME).
            return;
        };
        assert!(root.ends_with("kycflow"));
        assert_eq!(drafts, root.join("drafts"));
    }
}
