use crate::{Error, Result};
use bfhl_types::{DEFAULT_ENDPOINT, FilterSelection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const CONFIG_ENV: &str = "BFHL_CONFIG";
pub const ENDPOINT_ENV: &str = "BFHL_ENDPOINT";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BFHL_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.config/bfhl (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    resolve_config_path_with(explicit_path, std::env::var(CONFIG_ENV).ok())
}

fn resolve_config_path_with(explicit_path: Option<&str>, env_path: Option<String>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(env_path) = env_path {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("bfhl").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".config/bfhl/config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Transport timeout. Unset means the request may wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Filters pre-selected when a form session starts.
    #[serde(default, skip_serializing_if = "FilterSelection::is_empty")]
    pub default_filters: FilterSelection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            default_filters: FilterSelection::new(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.endpoint_url()?;
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

    /// Apply overrides in priority order: explicit flag, then BFHL_ENDPOINT.
    pub fn with_endpoint_override(self, explicit: Option<String>) -> Self {
        self.with_endpoint_override_from(explicit, std::env::var(ENDPOINT_ENV).ok())
    }

    fn with_endpoint_override_from(mut self, explicit: Option<String>, env: Option<String>) -> Self {
        if let Some(endpoint) = explicit.or(env).filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "endpoint must use http or https, got '{}'",
                other
            ))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
