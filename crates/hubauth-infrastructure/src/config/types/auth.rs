//! Authentication configuration types

use crate::constants::{DEFAULT_COOKIE_EXPIRATION_SECS, DEFAULT_COOKIE_NAME};
use hubauth_domain::AddUserCommand;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which authenticator the hub runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticatorKind {
    /// Auto-login only; hub users are not mapped onto OS accounts
    AutoLogin,
    /// Auto-login plus OS account checks, creation and group allow-listing
    #[default]
    LocalSystem,
}

/// Login cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// HMAC secret for the cookie token.
    ///
    /// Empty means a random secret is generated at startup, so cookies do
    /// not survive a restart. Configure via `HUBAUTH__AUTH__COOKIE__SECRET`.
    pub secret: String,

    /// Cookie lifetime in seconds
    pub expiration_secs: u64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            secret: String::new(),
            expiration_secs: DEFAULT_COOKIE_EXPIRATION_SECS,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Authenticator variant
    pub kind: AuthenticatorKind,

    /// Usernames allowed to log in; empty allows everyone
    pub whitelist: BTreeSet<String>,

    /// UNIX groups whose members may log in.
    ///
    /// When non-empty the username whitelist is ignored.
    pub group_whitelist: BTreeSet<String>,

    /// Create missing OS accounts instead of rejecting the login
    pub create_system_users: bool,

    /// Account creation command; `USERNAME` is replaced in every token and
    /// the username is appended. Unset picks the platform default.
    pub add_user_cmd: Option<AddUserCommand>,

    /// Login cookie
    pub cookie: CookieConfig,
}
