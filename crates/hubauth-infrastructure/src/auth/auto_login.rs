//! Auto-login authenticator
//!
//! Holds the username allow-list. The login itself happens in the hub's
//! `/login` route, which trusts the username file.

use async_trait::async_trait;
use dashmap::DashSet;
use hubauth_domain::error::Result;
use hubauth_domain::ports::Authenticator;
use hubauth_domain::value_objects::User;
use tracing::debug;

/// Authenticator with a username allow-list and no OS mapping
#[derive(Debug, Default)]
pub struct AutoLoginAuthenticator {
    whitelist: DashSet<String>,
}

impl AutoLoginAuthenticator {
    /// Create an authenticator allowing `whitelist`; an empty list allows everyone
    pub fn new<I>(whitelist: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            whitelist: whitelist.into_iter().collect(),
        }
    }

    /// Whether a username allow-list is configured
    pub fn has_whitelist(&self) -> bool {
        !self.whitelist.is_empty()
    }
}

#[async_trait]
impl Authenticator for AutoLoginAuthenticator {
    fn check_whitelist(&self, username: &str) -> bool {
        self.whitelist.is_empty() || self.whitelist.contains(username)
    }

    fn whitelisted_users(&self) -> Vec<String> {
        let mut users: Vec<String> = self.whitelist.iter().map(|name| name.key().clone()).collect();
        users.sort();
        users
    }

    /// Records the user on the allow-list, if one is in use
    async fn add_user(&self, user: &User) -> Result<()> {
        if self.has_whitelist() && self.whitelist.insert(user.name.clone()) {
            debug!(user = %user.name, "Added user to whitelist");
        }
        Ok(())
    }
}
