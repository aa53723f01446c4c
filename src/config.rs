use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn default_base_url() -> String {
    "/".to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_show_splash() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for asset URLs (sub-path hosting)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional YAML file replacing the built-in page content
    #[serde(default)]
    pub content_path: Option<String>,
    /// Event poll timeout; also paces smooth scrolling
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_show_splash")]
    pub show_splash: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            content_path: None,
            tick_rate_ms: default_tick_rate_ms(),
            show_splash: default_show_splash(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub content_path: Option<String>,
    pub no_splash: bool,
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".portfolio-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the saved config. `Ok(None)` when there is none yet.
    pub fn load() -> Result<Option<Config>> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(Some(config))
    }

    /// Load the saved config, falling back to defaults on any problem
    pub fn load_or_default() -> Config {
        match Self::load() {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("{:#}; using default config", err);
                Config::default()
            }
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Config {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(content_path) = overrides.content_path {
            self.content_path = Some(content_path);
        }
        if overrides.no_splash {
            self.show_splash = false;
        }
        self
    }

    /// Save the config to disk
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_dir.join("config.json"))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}
