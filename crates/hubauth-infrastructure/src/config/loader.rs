//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use crate::config::{AppConfig, AuthConfig, HubConfig, LoggingConfig, ServerConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, MIN_COOKIE_SECRET_LEN,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hubauth_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `HUBAUTH__AUTH__CREATE_SYSTEM_USERS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so field names keep their underscores
        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}__")).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_hub_config(&config.hub)?;
    validate_auth_config(&config.auth)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_server_config(server: &ServerConfig) -> Result<()> {
    if server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_hub_config(hub: &HubConfig) -> Result<()> {
    if !hub.base_url.starts_with('/') {
        return Err(Error::configuration(format!(
            "Hub base URL must start with '/': {}",
            hub.base_url
        )));
    }
    if let Some(c) = hub.base_url.chars().find(|c| !is_path_char(*c)) {
        return Err(Error::configuration(format!(
            "Hub base URL contains an invalid path character {c:?}: {}",
            hub.base_url
        )));
    }
    if hub.username_file.as_os_str().is_empty() {
        return Err(Error::configuration("Username file path cannot be empty"));
    }
    Ok(())
}

/// Characters allowed in a URI path segment, plus the separator
fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@%/".contains(c)
}

fn validate_auth_config(auth: &AuthConfig) -> Result<()> {
    let secret = &auth.cookie.secret;
    if !secret.is_empty() && secret.len() < MIN_COOKIE_SECRET_LEN {
        return Err(Error::configuration(format!(
            "Cookie secret should be at least {MIN_COOKIE_SECRET_LEN} characters long"
        )));
    }
    if auth.cookie.expiration_secs == 0 {
        return Err(Error::configuration("Cookie expiration cannot be 0"));
    }
    if auth.cookie.name.is_empty() {
        return Err(Error::configuration("Cookie name cannot be empty"));
    }
    if auth.add_user_cmd.as_ref().is_some_and(|cmd| cmd.is_empty()) {
        return Err(Error::configuration("add_user_cmd cannot be an empty list"));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level).map(|_| ())
}
