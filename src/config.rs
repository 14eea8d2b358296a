use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePref {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemePref {
    pub fn cycle(self) -> Self {
        match self {
            ThemePref::Light => ThemePref::Dark,
            ThemePref::Dark => ThemePref::Auto,
            ThemePref::Auto => ThemePref::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePref::Light => "light",
            ThemePref::Dark => "dark",
            ThemePref::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemePref,
}

/// Global config path (`~/.config/folio/config.toml`).
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
}

/// Load persisted preferences; anything unreadable falls back to defaults.
pub fn load_config() -> Config {
    config_path().map(|p| load_from(&p)).unwrap_or_default()
}

fn load_from(path: &Path) -> Config {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|c| toml::from_str(&c).ok())
        .unwrap_or_default()
}

/// Persist preferences to the global config dir.
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()
        .ok_or_else(|| FolioError::Config("Could not determine config directory".to_string()))?;
    save_to(&path, config)
}

fn save_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| FolioError::Config(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}
