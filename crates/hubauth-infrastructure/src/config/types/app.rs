//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, HubConfig, LoggingConfig, ServerConfig};

/// Root configuration, loaded once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Hub routing and the auto-login file
    pub hub: HubConfig,
    /// Authenticator selection and its settings
    pub auth: AuthConfig,
    /// Logging
    pub logging: LoggingConfig,
}
