//! OS adapters
//!
//! Implementations of the account directory and command runner ports on top
//! of libc (via `nix`) and tokio child processes.

pub mod accounts;
pub mod process;

pub use accounts::NixAccountDirectory;
pub use process::ProcessCommandRunner;
