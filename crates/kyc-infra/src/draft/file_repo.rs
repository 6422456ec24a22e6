//! File-based draft repository
//!
//! One pretty-printed JSON file per draft key inside a single directory.

use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use kyc_core::ports::{DraftStoreError, DraftStorePort};
use kyc_core::{Draft, DraftKey};

pub const DRAFT_FILE_EXTENSION: &str = "json";

pub struct FileDraftRepository {
    dir: PathBuf,
}

impl FileDraftRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Repository under the platform data directory.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self::new(crate::fs::drafts_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys are opaque; anything outside `[A-Za-z0-9_-]` is hex-escaped so a
    /// key can never leave the directory.
    fn path_for(&self, key: &DraftKey) -> PathBuf {
        let mut name = String::with_capacity(key.as_str().len());
        for byte in key.as_str().bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                name.push(byte as char);
            } else {
                name.push_str(&format!("%{byte:02X}"));
            }
        }
        self.dir.join(format!("{name}.{DRAFT_FILE_EXTENSION}"))
    }

    async fn atomic_write(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create drafts dir failed: {}", self.dir.display()))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp draft failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, path).await.with_context(|| {
            format!(
                "rename temp draft to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl DraftStorePort for FileDraftRepository {
    async fn save(&self, key: &DraftKey, draft: &Draft) -> Result<(), DraftStoreError> {
        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(draft)
            .map_err(|e| DraftStoreError::Store(format!("serialize draft failed: {e}")))?;

        self.atomic_write(&path, &content)
            .await
            .map_err(|e| DraftStoreError::Store(format!("{e:#}")))?;
        debug!(path = %path.display(), "draft written");
        Ok(())
    }

    async fn load(&self, key: &DraftKey) -> Result<Option<Draft>, DraftStoreError> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DraftStoreError::Store(format!(
                    "read draft failed: {}: {e}",
                    path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content).map(Some).map_err(|e| {
            DraftStoreError::Corrupt(format!("parse draft failed: {}: {e}", path.display()))
        })
    }
}
