//! Client configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. Command-line flags (applied by the caller through the `with_*` setters)
//! 2. `VITRINE_BASE_URL` / `VITRINE_TIMEOUT_SECONDS` environment variables
//! 3. Config file: an explicit path, else `~/.config/vitrine/config.yaml`
//! 4. Built-in defaults
//!
//! ```yaml
//! base_url: http://localhost:8080
//! timeout_seconds: 10
//! listing_page: produtos.html
//! placeholder_base: https://via.placeholder.com
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::format::DEFAULT_PLACEHOLDER_BASE;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment override for the backend address
pub const BASE_URL_ENV: &str = "VITRINE_BASE_URL";

/// Environment override for the request timeout
pub const TIMEOUT_ENV: &str = "VITRINE_TIMEOUT_SECONDS";

const MIN_TIMEOUT_SECONDS: u64 = 1;

/// Settings shared by the transport and the page flows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base address, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Page the registration flow navigates to after a successful create
    #[serde(default = "default_listing_page")]
    pub listing_page: String,

    /// Placeholder image service used when a product has no image
    #[serde(default = "default_placeholder_base")]
    pub placeholder_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            listing_page: default_listing_page(),
            placeholder_base: default_placeholder_base(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_listing_page() -> String {
    "produtos.html".to_string()
}

fn default_placeholder_base() -> String {
    DEFAULT_PLACEHOLDER_BASE.to_string()
}

impl ClientConfig {
    /// Resolve configuration from file and environment
    ///
    /// An explicit path must exist and parse. The default path is optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match explicit_path {
            Some(path) => Self::load_from_path(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from_path(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env()
    }

    /// Load configuration from a specific YAML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config: Self = serde_yaml_ng::from_str(&content).map_err(|e| {
            CatalogError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;

        tracing::debug!("Loaded client config from {}", path.display());
        config.normalized()
    }

    /// Default config file location
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "vitrine", "vitrine")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("vitrine")))
            .map(|dir| dir.join("config.yaml"))
    }

    /// Apply environment variable overrides
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            self = self.with_base_url(&url)?;
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let seconds = raw.trim().parse::<u64>().map_err(|_| {
                CatalogError::Config(format!("{TIMEOUT_ENV} must be a whole number, got '{raw}'"))
            })?;
            self = self.with_timeout_seconds(seconds);
        }

        Ok(self)
    }

    /// Override the backend address
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.base_url = url.to_string();
        self.normalized()
    }

    /// Override the request timeout
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Effective request timeout, never below one second
    pub fn timeout(&self) -> Duration {
        if self.timeout_seconds < MIN_TIMEOUT_SECONDS {
            tracing::warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.timeout_seconds,
                MIN_TIMEOUT_SECONDS
            );
            return Duration::from_secs(MIN_TIMEOUT_SECONDS);
        }
        Duration::from_secs(self.timeout_seconds)
    }

    /// URL of the product collection
    pub fn collection_url(&self) -> String {
        format!("{}/product", self.base_url)
    }

    fn normalized(mut self) -> Result<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(CatalogError::Config(format!(
                "Backend URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }
}
