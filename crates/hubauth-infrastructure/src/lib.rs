//! # hubauth infrastructure
//!
//! Cross-cutting concerns and OS integrations for the hubauth authenticator.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | tracing subscriber setup |
//! | [`os`] | Password/group database lookups and child processes |
//! | [`auth`] | Auto-login and local-system authenticators |

pub mod auth;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod os;

pub use auth::{AutoLoginAuthenticator, LocalSystemAuthenticator, build_authenticator};
pub use config::{AppConfig, ConfigLoader};
pub use os::{NixAccountDirectory, ProcessCommandRunner};
