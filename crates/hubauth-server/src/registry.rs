//! User registry
//!
//! In-memory hub user records. The first time a username is seen the
//! authenticator's `add_user` hook runs; the record is only stored when the
//! hook succeeds.

use dashmap::DashMap;
use hubauth_domain::error::{Error, Result};
use hubauth_domain::ports::Authenticator;
use hubauth_domain::value_objects::User;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Hub user records keyed by name
pub struct UserRegistry {
    users: DashMap<String, User>,
    authenticator: Arc<dyn Authenticator>,
    enforce_allow_list: bool,
}

impl UserRegistry {
    /// Create an empty registry
    pub fn new(authenticator: Arc<dyn Authenticator>, enforce_allow_list: bool) -> Self {
        Self {
            users: DashMap::new(),
            authenticator,
            enforce_allow_list,
        }
    }

    /// Existing record for `username`, if any
    pub fn get(&self, username: &str) -> Option<User> {
        self.users.get(username).map(|user| user.value().clone())
    }

    /// Number of known users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Return the record for `username`, creating it if needed.
    ///
    /// Creation fires the authenticator's new-user hook. Two concurrent
    /// first requests for one name both run the hook.
    pub async fn user_from_username(&self, username: &str) -> Result<User> {
        if let Some(user) = self.get(username) {
            return Ok(user);
        }

        if self.enforce_allow_list && !self.authenticator.check_whitelist(username) {
            warn!(user = %username, "Refusing user not on the allow-list");
            return Err(Error::not_allowed(username));
        }

        let user = User::new(username);
        self.authenticator.add_user(&user).await?;
        info!(user = %username, "Added new user");

        Ok(self
            .users
            .entry(username.to_string())
            .or_insert(user)
            .value()
            .clone())
    }

    /// Create records for everyone on the username allow-list.
    ///
    /// Failures are logged and skipped. Returns the number of users added.
    pub async fn provision_whitelisted(&self) -> usize {
        let mut added = 0;
        for name in self.authenticator.whitelisted_users() {
            if self.users.contains_key(&name) {
                continue;
            }
            match self.user_from_username(&name).await {
                Ok(_) => added += 1,
                Err(e) => error!(user = %name, error = %e, "Failed to provision user"),
            }
        }
        added
    }
}
