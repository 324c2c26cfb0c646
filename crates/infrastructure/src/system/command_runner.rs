use async_trait::async_trait;
use ferrous_arp_application::ports::{CommandOutput, CommandRunner};
use ferrous_arp_domain::DomainError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs external programs with `tokio::process`, buffering both streams
/// until the child exits.
#[derive(Debug, Clone, Default)]
pub struct TokioCommandRunner {
    timeout: Option<Duration>,
}

impl TokioCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` waits for the child however long it takes.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, DomainError> {
        debug!(program = %program, args = ?args, "Running command");

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null()).kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, command.output()).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(program = %program, secs = limit.as_secs(), "Command timed out");
                    return Err(DomainError::CommandTimeout {
                        program: program.to_string(),
                        secs: limit.as_secs(),
                    });
                }
            },
            None => command.output().await,
        }
        .map_err(|e| DomainError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

        let code = output.status.code();
        debug!(program = %program, code = ?code, "Command exited");

        Ok(CommandOutput {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
