//! Local system authenticator
//!
//! Maps hub users onto OS accounts. A missing account is either created with
//! the configured command or causes the login to be rejected. Membership of a
//! UNIX group can replace the username allow-list.
//!
//! The existence check and the creation are not done under a lock, so two
//! simultaneous first logins of the same name may both run the command.

use async_trait::async_trait;
use hubauth_domain::error::{Error, Result};
use hubauth_domain::ports::{AccountDirectory, Authenticator, CommandRunner};
use hubauth_domain::value_objects::command::shell_join;
use hubauth_domain::value_objects::{AddUserCommand, User};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::AutoLoginAuthenticator;
use crate::config::AuthConfig;

/// Authenticator backed by the local OS account databases
pub struct LocalSystemAuthenticator {
    base: AutoLoginAuthenticator,
    group_whitelist: BTreeSet<String>,
    create_system_users: bool,
    add_user_cmd: Option<AddUserCommand>,
    accounts: Arc<dyn AccountDirectory>,
    runner: Arc<dyn CommandRunner>,
}

impl LocalSystemAuthenticator {
    /// Build the authenticator from configuration.
    ///
    /// Without an explicit `add_user_cmd` the platform default is used. If
    /// the platform has none, construction fails when `create_system_users`
    /// is on; otherwise the failure is deferred to the first creation attempt.
    pub fn new(
        config: &AuthConfig,
        accounts: Arc<dyn AccountDirectory>,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self> {
        let add_user_cmd = match &config.add_user_cmd {
            Some(cmd) => Some(cmd.clone()),
            None => match AddUserCommand::platform_default() {
                Ok(cmd) => Some(cmd),
                Err(e) if config.create_system_users => return Err(e),
                Err(e) => {
                    debug!(error = %e, "No default account creation command");
                    None
                }
            },
        };

        if !config.group_whitelist.is_empty() && !config.whitelist.is_empty() {
            warn!("Ignoring username whitelist because group whitelist supplied!");
        }

        Ok(Self {
            base: AutoLoginAuthenticator::new(config.whitelist.iter().cloned()),
            group_whitelist: config.group_whitelist.clone(),
            create_system_users: config.create_system_users,
            add_user_cmd,
            accounts,
            runner,
        })
    }

    /// Whether `username` is a member of any configured group.
    ///
    /// Groups missing from the OS group database are logged and skipped.
    pub fn check_group_whitelist(&self, username: &str) -> bool {
        if self.group_whitelist.is_empty() {
            return false;
        }
        for group in &self.group_whitelist {
            let members = match self.accounts.group_members(group) {
                Ok(Some(members)) => members,
                Ok(None) => {
                    error!("No such group: [{}]", group);
                    continue;
                }
                Err(e) => {
                    error!(group = %group, error = %e, "Group lookup failed");
                    continue;
                }
            };
            if members.iter().any(|member| member == username) {
                return true;
            }
        }
        false
    }

    /// Whether an OS account exists for `user`
    pub fn system_user_exists(&self, user: &User) -> Result<bool> {
        self.accounts.account_exists(&user.name)
    }

    /// Create the OS account for `user` with the configured command.
    ///
    /// Success is the command's zero exit; the account is not looked up again.
    pub async fn add_system_user(&self, user: &User) -> Result<()> {
        let name = &user.name;
        let Some(template) = &self.add_user_cmd else {
            return Err(Error::configuration(
                "No account creation command available on this platform; set auth.add_user_cmd",
            ));
        };

        let argv = template.argv_for(name);
        info!("Creating user: {}", shell_join(&argv));

        let outcome = self.runner.run(&argv).await?;
        if !outcome.success() {
            error!(user = %name, exit_code = ?outcome.exit_code, "Failed to create system user");
            return Err(Error::account_creation(name, outcome.output));
        }
        Ok(())
    }
}

#[async_trait]
impl Authenticator for LocalSystemAuthenticator {
    fn check_whitelist(&self, username: &str) -> bool {
        if self.group_whitelist.is_empty() {
            self.base.check_whitelist(username)
        } else {
            self.check_group_whitelist(username)
        }
    }

    fn whitelisted_users(&self) -> Vec<String> {
        self.base.whitelisted_users()
    }

    async fn add_user(&self, user: &User) -> Result<()> {
        if !self.system_user_exists(user)? {
            if self.create_system_users {
                self.add_system_user(user).await?;
            } else {
                return Err(Error::user_not_found(&user.name));
            }
        }

        self.base.add_user(user).await
    }
}
