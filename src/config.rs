//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory and includes:
//! - The catalog API base URL
//! - The signed-in user profile, if any

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{MarqueeError, Result};

/// Overrides the directory holding `config.yaml`.
pub const CONFIG_DIR_ENV: &str = "MARQUEE_CONFIG_DIR";

/// Overrides `base_url` from the config file.
pub const BASE_URL_ENV: &str = "MARQUEE_BASE_URL";

/// Keys accepted by `marquee config get|set`.
pub const CONFIG_KEYS: [&str; 4] = ["base_url", "user.name", "user.email", "user.photo"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the catalog REST API, e.g. `https://api.example.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Profile of the signed-in user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Identity supplied by the sign-in provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Config {
    /// Directory holding `config.yaml`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }

        ProjectDirs::from("", "", "marquee")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| {
                MarqueeError::Config("could not determine a home directory".to_string())
            })
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            MarqueeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MarqueeError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            MarqueeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Resolve the API base URL: environment first, then the config file.
    pub fn base_url(&self) -> Result<Url> {
        let raw = match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.base_url.clone().ok_or_else(|| {
                MarqueeError::Config(format!(
                    "no API base URL configured. Run 'marquee config set base_url <url>' or set {BASE_URL_ENV}"
                ))
            })?,
        };
        parse_base_url(&raw)
    }

    /// Read a single key as a display string. Unset keys return `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let user = self.user.as_ref();
        match key {
            "base_url" => Ok(self.base_url.clone()),
            "user.name" => Ok(user.map(|u| u.name.clone())),
            "user.email" => Ok(user.map(|u| u.email.clone())),
            "user.photo" => Ok(user.and_then(|u| u.photo.clone())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key. Values are validated before they are stored.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => {
                parse_base_url(value)?;
                self.base_url = Some(value.trim().to_string());
            }
            "user.name" => self.user.get_or_insert_with(Default::default).name = value.to_string(),
            "user.email" => {
                self.user.get_or_insert_with(Default::default).email = value.to_string()
            }
            "user.photo" => {
                Url::parse(value)?;
                self.user.get_or_insert_with(Default::default).photo = Some(value.to_string());
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Clear a single key, dropping the user profile once it is empty.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "base_url" => self.base_url = None,
            "user.name" | "user.email" | "user.photo" => {
                if let Some(user) = self.user.as_mut() {
                    match key {
                        "user.name" => user.name.clear(),
                        "user.email" => user.email.clear(),
                        _ => user.photo = None,
                    }
                    if user.name.is_empty() && user.email.is_empty() && user.photo.is_none() {
                        self.user = None;
                    }
                }
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> MarqueeError {
    MarqueeError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

/// Parse and check a base URL. Only http(s) URLs are accepted.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(MarqueeError::Config(format!(
            "base URL must use http or https, got '{other}'"
        ))),
    }
}
