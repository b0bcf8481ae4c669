use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::USERNAME_PLACEHOLDER;
use crate::error::{Error, Result};

/// Template of the external command that creates OS accounts.
///
/// Every occurrence of `USERNAME` inside every token is replaced with the
/// username, and the username is appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddUserCommand(Vec<String>);

impl AddUserCommand {
    /// Build a template from raw tokens
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Non-interactive `adduser` as shipped by Debian-style distributions
    pub fn linux_default() -> Self {
        Self::new(["adduser", "-q", "--gecos", "\"\"", "--disabled-password"])
    }

    /// `pw useradd` as shipped by the BSD family
    pub fn bsd_default() -> Self {
        Self::new(["pw", "useradd", "-m"])
    }

    /// Default template for the running platform
    pub fn platform_default() -> Result<Self> {
        Self::for_target_os(std::env::consts::OS)
    }

    /// Default template for a given `target_os` name
    pub fn for_target_os(os: &str) -> Result<Self> {
        match os {
            "linux" => Ok(Self::linux_default()),
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Ok(Self::bsd_default()),
            "macos" => Err(Error::configuration(
                "I don't know how to create users on macOS; set auth.add_user_cmd",
            )),
            other => Err(Error::configuration(format!(
                "No default account creation command for platform '{other}'; set auth.add_user_cmd"
            ))),
        }
    }

    /// Whether the template has no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full argument vector for creating `username`
    pub fn argv_for(&self, username: &str) -> Vec<String> {
        self.0
            .iter()
            .map(|token| token.replace(USERNAME_PLACEHOLDER, username))
            .chain(std::iter::once(username.to_string()))
            .collect()
    }
}

impl fmt::Display for AddUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_join(&self.0))
    }
}

/// Render an argument vector the way a POSIX shell would need it typed
pub fn shell_join<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter()
        .map(|arg| shell_quote(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    let safe = arg
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\"'\"'"))
    }
}
