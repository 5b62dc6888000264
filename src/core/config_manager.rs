// src/core/config_manager.rs
//! Configuration loading - optional config.yaml profile plus environment overrides

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DOWNLOAD_DIR: &str = "downloads";
const DEFAULT_CONFIG_FILE: &str = "config.yaml";
const DEFAULT_SESSION_IDLE_SECS: u64 = 2 * 60 * 60;
const PRODUCTION: &str = "production";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub api: ApiConfig,
    pub server: ServerSettings,
    pub download_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    /// Rocket secret key for the private session cookie. Required in production.
    pub secret_key: Option<String>,
    /// Sessions idle for longer than this are dropped.
    pub session_idle_secs: u64,
}

/// One profile of config.yaml. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub api_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub port: Option<u16>,
    pub download_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub secret_key: Option<String>,
    pub session_idle_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: ProfileConfig,
    production: ProfileConfig,
}

impl ConfigManager {
    /// Load configuration for the current environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = std::env::var("CVLENS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let profile = Self::load_profile(&config_path, &environment)?;
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;

        Self::resolve(environment, profile, &base_dir, |key| std::env::var(key).ok())
    }

    /// Check the settings the web server needs before launching it.
    ///
    /// Private session cookies need a stable secret key outside of local runs.
    pub fn validate_for_server(&self) -> Result<()> {
        if self.environment == PRODUCTION && self.server.secret_key.is_none() {
            bail!(
                "CVLENS_SECRET_KEY must be set in production \
                 (generate one with `openssl rand -base64 32`)"
            );
        }
        Ok(())
    }

    fn get_environment() -> String {
        std::env::var("CVLENS_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_profile(path: &Path, environment: &str) -> Result<ProfileConfig> {
        if !path.exists() {
            info!("No {} found, using environment and defaults", path.display());
            return Ok(ProfileConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            PRODUCTION => file.production,
            _ => file.local,
        })
    }

    /// Merge a profile with environment overrides. `var` looks up one variable.
    pub fn resolve<F>(
        environment: String,
        profile: ProfileConfig,
        base_dir: &Path,
        var: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = var("CVLENS_API_URL")
            .or(profile.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_seconds = match var("CVLENS_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("CVLENS_TIMEOUT_SECS must be a number, got '{}'", raw))?,
            None => profile.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let port = match var("CVLENS_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("CVLENS_PORT must be a valid port number, got '{}'", raw))?,
            None => profile.port.unwrap_or(DEFAULT_PORT),
        };

        let download_dir = var("CVLENS_DOWNLOAD_DIR")
            .map(PathBuf::from)
            .or(profile.download_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR));

        let log_file = var("CVLENS_LOG_FILE")
            .map(PathBuf::from)
            .or(profile.log_file)
            .map(|path| resolve_path(base_dir, &path));

        let secret_key = var("CVLENS_SECRET_KEY").or(profile.secret_key);

        let session_idle_secs = match var("CVLENS_SESSION_IDLE_SECS") {
            Some(raw) => raw.parse::<u64>().with_context(|| {
                format!("CVLENS_SESSION_IDLE_SECS must be a number, got '{}'", raw)
            })?,
            None => profile.session_idle_secs.unwrap_or(DEFAULT_SESSION_IDLE_SECS),
        };

        Ok(Self {
            environment,
            api: ApiConfig {
                base_url,
                timeout_seconds,
            },
            server: ServerSettings {
                port,
                secret_key,
                session_idle_secs,
            },
            download_dir: resolve_path(base_dir, &download_dir),
            log_file,
        })
    }
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
