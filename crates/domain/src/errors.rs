use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Command exited with {}: {stderr}", format_exit_code(.code))]
    Command { code: Option<i32>, stderr: String },

    #[error("Failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("{program} did not exit within {secs}s")]
    CommandTimeout { program: String, secs: u64 },

    #[error("Could not find ip in arp table: {0}")]
    NotFound(String),

    #[error("No results for {0}")]
    NoResult(String),
}

impl DomainError {
    /// True for the two "address has no entry" outcomes, as opposed to a
    /// failure to run or parse the table command.
    pub fn is_missing_entry(&self) -> bool {
        matches!(self, DomainError::NotFound(_) | DomainError::NoResult(_))
    }
}

fn format_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "signal".to_string(),
    }
}
