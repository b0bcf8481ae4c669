//! Infrastructure layer constants
//!
//! Domain-level constants live in `hubauth_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hubauth.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hubauth";

/// Environment variable prefix for configuration (`HUBAUTH__AUTH__KIND=...`)
pub const CONFIG_ENV_PREFIX: &str = "HUBAUTH";

// ============================================================================
// HUB CONSTANTS
// ============================================================================

/// Default hub base URL
pub const DEFAULT_HUB_BASE_URL: &str = "/hub/";

/// Username file read by the auto-login handler, relative to the working directory
pub const DEFAULT_USERNAME_FILE: &str = "auto_login_username.txt";

/// Default HTTP bind address
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

// ============================================================================
// LOGIN COOKIE CONSTANTS
// ============================================================================

/// Name of the login cookie
pub const DEFAULT_COOKIE_NAME: &str = "hubauth-session";

/// Login cookie lifetime in seconds (14 days)
pub const DEFAULT_COOKIE_EXPIRATION_SECS: u64 = 14 * 24 * 3600;

/// Minimum length of a configured cookie secret
pub const MIN_COOKIE_SECRET_LEN: usize = 32;

/// Length of the secret generated when none is configured
pub const GENERATED_COOKIE_SECRET_LEN: usize = 64;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "HUBAUTH_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
