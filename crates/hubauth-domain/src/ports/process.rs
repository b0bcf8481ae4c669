//! External Command Port
//!
//! Runs a program to completion and hands back its combined output.

use crate::error::Result;
use async_trait::async_trait;

/// Outcome of a finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Interleaved stdout and stderr, decoded lossily as UTF-8
    pub output: String,
}

impl CommandOutput {
    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Executes external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `argv[0]` with the remaining arguments and wait for it to exit.
    ///
    /// There is no timeout; a hung command blocks the caller.
    async fn run(&self, argv: &[String]) -> Result<CommandOutput>;
}
