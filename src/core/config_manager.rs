// src/core/config_manager.rs
//! Configuration: optional `config.yaml` profile, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::contract::BackendContract;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub preferences_path: PathBuf,
    pub log_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub contract: BackendContract,
    /// `None` waits for the transport indefinitely
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileConfig {
    base_url: Option<String>,
    contract: Option<BackendContract>,
    timeout_seconds: Option<u64>,
    preferences_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ProfileConfig,
    #[serde(default)]
    production: ProfileConfig,
}

impl ConfigManager {
    /// Load from `./config.yaml` and the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Load with an explicit config path and variable lookup
    pub fn load_from<F>(config_path: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = env("ENVIRONMENT").unwrap_or_else(|| "local".to_string());
        info!("Loading configuration for environment: {}", environment);

        let profile = Self::load_profile(config_path, &environment)?;

        let base_url = env("RESUME_SCANNER_API_BASE_URL")
            .or(profile.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let contract = match env("RESUME_SCANNER_CONTRACT") {
            Some(value) => value.parse()?,
            None => profile.contract.unwrap_or_default(),
        };

        let timeout_seconds = match env("RESUME_SCANNER_TIMEOUT_SECS") {
            Some(value) => Some(
                value
                    .parse::<u64>()
                    .map_err(|_| anyhow::anyhow!("RESUME_SCANNER_TIMEOUT_SECS must be a number of seconds"))?,
            ),
            None => profile.timeout_seconds,
        };

        let preferences_path = env("RESUME_SCANNER_PREFERENCES")
            .map(PathBuf::from)
            .or(profile.preferences_path)
            .unwrap_or_else(|| Self::default_preferences_path(env("HOME")));

        let log_path = env("RESUME_SCANNER_LOG")
            .map(PathBuf::from)
            .or(profile.log_path)
            .unwrap_or_else(|| std::env::temp_dir().join("resume-scanner.log"));

        Ok(Self {
            environment,
            service: ServiceConfig {
                base_url,
                contract,
                timeout_seconds,
            },
            preferences_path,
            log_path,
        })
    }

    fn load_profile(config_path: &Path, environment: &str) -> Result<ProfileConfig> {
        if !config_path.exists() {
            return Ok(ProfileConfig::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config_file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn default_preferences_path(home: Option<String>) -> PathBuf {
        match home {
            Some(home) => PathBuf::from(home)
                .join(".config")
                .join("resume-scanner")
                .join("preferences.toml"),
            None => PathBuf::from("preferences.toml"),
        }
    }
}
