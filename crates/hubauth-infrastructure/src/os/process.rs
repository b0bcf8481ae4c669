//! Child process execution
//!
//! stdout and stderr share one pipe so the captured text keeps the order in
//! which the command wrote it.

use async_trait::async_trait;
use hubauth_domain::error::{Error, Result};
use hubauth_domain::ports::{CommandOutput, CommandRunner};
use std::io::Read;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs commands as tokio child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        let Some((program, args)) = argv.split_first() else {
            return Err(Error::internal("Cannot run an empty command"));
        };

        let (mut reader, writer) = std::io::pipe()?;
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        let mut child = command.spawn()?;
        // The command still owns the write ends; the reader only sees EOF once they are closed
        drop(command);

        let drain = tokio::task::spawn_blocking(move || {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).map(|_| buf)
        });

        let status = child.wait().await?;
        let bytes = drain
            .await
            .map_err(|e| Error::internal(format!("Output reader task failed: {e}")))??;

        debug!(program = %program, status = ?status.code(), "Command finished");
        Ok(CommandOutput {
            exit_code: status.code(),
            output: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
