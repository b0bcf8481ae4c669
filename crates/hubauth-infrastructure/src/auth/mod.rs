//! Authenticators
//!
//! - [`AutoLoginAuthenticator`] - username allow-list and hub bookkeeping only
//! - [`LocalSystemAuthenticator`] - maps hub users onto OS accounts, with
//!   optional account creation and UNIX group allow-listing

pub mod auto_login;
pub mod local_system;

pub use auto_login::AutoLoginAuthenticator;
pub use local_system::LocalSystemAuthenticator;

use crate::config::{AuthConfig, AuthenticatorKind};
use hubauth_domain::error::Result;
use hubauth_domain::ports::{AccountDirectory, Authenticator, CommandRunner};
use std::sync::Arc;
use tracing::info;

/// Build the authenticator selected by `auth.kind`
pub fn build_authenticator(
    config: &AuthConfig,
    accounts: Arc<dyn AccountDirectory>,
    runner: Arc<dyn CommandRunner>,
) -> Result<Arc<dyn Authenticator>> {
    info!(kind = ?config.kind, "Building authenticator");
    let authenticator: Arc<dyn Authenticator> = match config.kind {
        AuthenticatorKind::AutoLogin => Arc::new(AutoLoginAuthenticator::new(
            config.whitelist.iter().cloned(),
        )),
        AuthenticatorKind::LocalSystem => {
            Arc::new(LocalSystemAuthenticator::new(config, accounts, runner)?)
        }
    };
    Ok(authenticator)
}
