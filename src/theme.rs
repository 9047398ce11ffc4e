// src/theme.rs
//! Light/dark preference, the only state persisted between runs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::FsOps;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

/// Preference file holding a single `theme` key
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved theme. A missing or unreadable file falls back to light.
    pub async fn load(&self) -> Theme {
        if !self.path.exists() {
            return Theme::default();
        }

        match self.read().await {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                warn!("Ignoring preferences at {}: {:#}", self.path.display(), e);
                Theme::default()
            }
        }
    }

    async fn read(&self) -> Result<Preferences> {
        let content = FsOps::read_file_safe(&self.path).await?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    pub async fn save(&self, theme: Theme) -> Result<()> {
        let content = toml::to_string(&Preferences { theme })
            .context("Failed to serialize preferences")?;
        FsOps::write_file_safe(&self.path, &content).await?;
        info!("Saved theme preference: {}", theme);
        Ok(())
    }

    /// Flip the stored theme and return the new value
    pub async fn toggle(&self) -> Result<Theme> {
        let theme = self.load().await.toggled();
        self.save(theme).await?;
        Ok(theme)
    }
}
