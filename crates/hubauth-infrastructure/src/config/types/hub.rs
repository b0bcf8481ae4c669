//! Hub configuration types

use crate::constants::{DEFAULT_HUB_BASE_URL, DEFAULT_USERNAME_FILE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hub routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Prefix every hub route is mounted under
    pub base_url: String,

    /// File holding the username the auto-login handler signs in
    pub username_file: PathBuf,

    /// Refuse to create user records for names failing the allow-list.
    ///
    /// Off by default: the auto-login handler trusts the username file.
    pub enforce_allow_list: bool,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HUB_BASE_URL.to_string(),
            username_file: PathBuf::from(DEFAULT_USERNAME_FILE),
            enforce_allow_list: false,
        }
    }
}
