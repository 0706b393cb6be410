use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.currencyapi.com/v3";
pub const API_KEY_ENV: &str = "CURRENCYAPI_KEY";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "BRL".to_string()
}

fn default_history_days() -> u32 {
    7
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for CurrencyApiConfig {
    fn default() -> Self {
        CurrencyApiConfig {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub currencyapi: CurrencyApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_from")]
    pub default_from: String,
    #[serde(default = "default_to")]
    pub default_to: String,
    #[serde(default = "default_history_days")]
    pub history_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            default_from: default_from(),
            default_to: default_to(),
            history_days: default_history_days(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "cambio", "cambio")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// API key from the environment, falling back to the config file.
    pub fn api_key(&self) -> String {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key(&self, env_key: Option<String>) -> String {
        let key = env_key
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| self.providers.currencyapi.api_key.clone());
        if key.is_empty() {
            warn!("No API key configured, live rates will be unavailable");
        }
        key
    }
}
