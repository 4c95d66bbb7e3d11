use crate::args::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sideload_document::{DEFAULT_DISPLAY_ATTRIBUTES, DisplayPreference};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SIDELOAD_CONFIG";

const DEFAULT_TRUNCATE_WIDTH: usize = 40;

/// Resolve the config file path based on priority:
/// 1. Explicit path (`--config`, with tilde expansion)
/// 2. SIDELOAD_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`sideload/config.toml`)
/// 4. ~/.sideload/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.trim().is_empty()
    {
        return Some(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Some(config_dir.join("sideload").join("config.toml"));
    }

    dirs::home_dir().map(|home| home.join(".sideload").join("config.toml"))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format when `--format` is not given
    pub format: OutputFormat,
    /// Maximum table cell width when `--width` is not given
    pub truncate_width: usize,
    /// Attribute names tried, in order, for a related resource's label
    pub display_preference: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            truncate_width: DEFAULT_TRUNCATE_WIDTH,
            display_preference: DEFAULT_DISPLAY_ATTRIBUTES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load from the resolved default location, or defaults if there is none
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Missing file → defaults; unreadable or malformed file → error
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Display preference for the resolver; an empty list falls back to the default
    pub fn display_preference(&self) -> DisplayPreference {
        if self.display_preference.is_empty() {
            DisplayPreference::default()
        } else {
            DisplayPreference::new(self.display_preference.iter().cloned())
        }
    }
}
