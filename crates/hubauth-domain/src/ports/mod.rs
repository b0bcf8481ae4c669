//! Domain Port Interfaces
//!
//! Contracts implemented by the infrastructure layer and consumed by the hub:
//!
//! - **authenticator** - allow-list checks and the new-user hook
//! - **accounts** - OS password and group databases
//! - **process** - external command execution

/// OS identity database port
pub mod accounts;
/// Authenticator port
pub mod authenticator;
/// External command port
pub mod process;

pub use accounts::AccountDirectory;
pub use authenticator::Authenticator;
pub use process::{CommandOutput, CommandRunner};
