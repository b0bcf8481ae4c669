//! OS Account Directory Port
//!
//! Read-only view of the system password and group databases.

use crate::error::Result;

/// Lookup interface over the OS identity databases
pub trait AccountDirectory: Send + Sync {
    /// Whether an OS account named `username` exists (`getpwnam`)
    fn account_exists(&self, username: &str) -> Result<bool>;

    /// Member usernames of `group`, or `None` when no such group exists (`getgrnam`)
    fn group_members(&self, group: &str) -> Result<Option<Vec<String>>>;
}
