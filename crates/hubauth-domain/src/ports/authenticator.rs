//! Authenticator Port
//!
//! The extension points the hub calls into: login URL generation, allow-list
//! checks and the hook fired when a user is seen for the first time.

use crate::constants::LOGIN_PATH;
use crate::error::Result;
use crate::utils::url_path_join;
use crate::value_objects::User;
use async_trait::async_trait;

/// Authenticator interface
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// URL the hub sends users to for logging in
    fn login_url(&self, base_url: &str) -> String {
        url_path_join(&[base_url, LOGIN_PATH])
    }

    /// Whether `username` may log in
    fn check_whitelist(&self, username: &str) -> bool;

    /// Usernames on the username allow-list, used for startup provisioning
    fn whitelisted_users(&self) -> Vec<String>;

    /// Hook fired when the hub records a user it has not seen before
    async fn add_user(&self, user: &User) -> Result<()>;
}
