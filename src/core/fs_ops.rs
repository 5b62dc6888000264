// src/core/fs_ops.rs
//! File system operations for saved downloads

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Write bytes, creating the parent directory first
    pub async fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!("Written file: {} ({} bytes)", path.display(), content.len());
        Ok(())
    }

    /// Keep a download name inside its directory: path separators and
    /// control characters become `_`.
    pub fn sanitize_file_name(name: &str) -> String {
        let cleaned: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();

        match cleaned.trim_start_matches('.') {
            "" => "report.pdf".to_string(),
            rest => rest.to_string(),
        }
    }

    pub fn download_path(dir: &Path, file_name: &str) -> PathBuf {
        dir.join(Self::sanitize_file_name(file_name))
    }
}
