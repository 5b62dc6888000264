// src/controller/agent.rs
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{error, info};

use crate::core::FsOps;

/// What the host does with a finished export: save the file or interrupt
/// the user with a blocking alert.
#[async_trait]
pub trait UserAgent: Send + Sync {
    async fn download(&self, file_name: &str, document: Vec<u8>) -> Result<()>;
    fn alert(&self, message: &str);
}

/// Saves downloads into a directory and prints alerts to stderr.
pub struct TerminalAgent {
    download_dir: PathBuf,
}

impl TerminalAgent {
    pub fn new(download_dir: PathBuf) -> Self {
        Self { download_dir }
    }
}

#[async_trait]
impl UserAgent for TerminalAgent {
    async fn download(&self, file_name: &str, document: Vec<u8>) -> Result<()> {
        let path = FsOps::download_path(&self.download_dir, file_name);
        FsOps::write_bytes(&path, &document).await?;
        info!("Saved download to {}", path.display());
        println!("✓ Saved {}", path.display());
        Ok(())
    }

    fn alert(&self, message: &str) {
        error!("{}", message);
        eprintln!("❌ {}", message);
    }
}
