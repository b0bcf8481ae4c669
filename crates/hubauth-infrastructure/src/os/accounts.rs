//! Password and group database lookups

use crate::error_ext::ErrorContext;
use hubauth_domain::error::Result;
use hubauth_domain::ports::AccountDirectory;
use nix::unistd::{Group, User};

/// Account directory backed by `getpwnam_r` / `getgrnam_r`
#[derive(Debug, Clone, Copy, Default)]
pub struct NixAccountDirectory;

impl NixAccountDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl AccountDirectory for NixAccountDirectory {
    fn account_exists(&self, username: &str) -> Result<bool> {
        let user = User::from_name(username)
            .account_db_context(format!("Password lookup for '{username}' failed"))?;
        Ok(user.is_some())
    }

    fn group_members(&self, group: &str) -> Result<Option<Vec<String>>> {
        let entry = Group::from_name(group)
            .account_db_context(format!("Group lookup for '{group}' failed"))?;
        Ok(entry.map(|g| g.mem))
    }
}
