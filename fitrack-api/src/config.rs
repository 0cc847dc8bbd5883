//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `FITRACK_`, nested keys separated by `__`,
//!    e.g. `FITRACK_PAGING__DEFAULT_PAGE_SIZE=25`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/fitrack/{service_name}/config.toml
//! 4. System directory: /etc/fitrack/{service_name}/config.toml
//! 5. Default values
//!
//! # Example config.toml
//!
//! ```toml
//! [service]
//! name = "fitrack-api"
//! log_level = "debug"
//! environment = "staging"
//!
//! [paging]
//! default_page_size = 25
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_SERVICE_NAME: &str = "fitrack-api";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// List endpoint paging defaults
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Log level or `EnvFilter` directive (e.g. `info`, `fitrack_api=debug`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Paging defaults for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page size used when a request does not specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_page_size() -> i64 {
    crate::paging::DEFAULT_PAGE_SIZE
}

impl Config {
    /// Load configuration, inferring the service name from the binary name
    pub fn load() -> Result<Self> {
        let service_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        Self::load_for_service(&service_name)
    }

    /// Load configuration for a specific service name
    pub fn load_for_service(service_name: &str) -> Result<Self> {
        let config_paths = Self::find_config_paths(service_name);

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Self::defaults_for(service_name)));

        // Lowest priority first so later files override earlier ones
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("FITRACK_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Defaults fill in missing keys and `FITRACK_` environment variables
    /// still override the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("FITRACK_").split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the deserializer cannot
    pub fn validate(&self) -> Result<()> {
        if self.paging.default_page_size < 1 {
            return Err(Error::InvalidConfig(format!(
                "paging.default_page_size must be at least 1, got {}",
                self.paging.default_page_size
            )));
        }
        Ok(())
    }

    /// Find all possible config file paths for a service
    ///
    /// Returns paths in priority order (highest first):
    /// 1. Current working directory
    /// 2. XDG config directory
    /// 3. System directory
    fn find_config_paths(service_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix("fitrack");
        if let Some(path) = xdg_dirs.find_config_file(Path::new(service_name).join("config.toml")) {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc/fitrack")
                .join(service_name)
                .join("config.toml"),
        );

        paths
    }

    fn defaults_for(service_name: &str) -> Self {
        let mut config = Self::default();
        config.service.name = service_name.to_string();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: DEFAULT_SERVICE_NAME.to_string(),
                log_level: default_log_level(),
                environment: default_environment(),
            },
            paging: PagingConfig::default(),
        }
    }
}
