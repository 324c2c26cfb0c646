#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_arp_application::ports::{CommandOutput, CommandRunner};
use ferrous_arp_domain::DomainError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Replays canned output per program and remembers every invocation.
pub struct ScriptedRunner {
    outputs: HashMap<String, CommandOutput>,
    calls: Arc<RwLock<Vec<(String, Vec<String>)>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            outputs: HashMap::new(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn arp(stdout: &str) -> Self {
        Self::new().with_output("arp", CommandOutput::success(stdout))
    }

    pub fn with_output(mut self, program: &str, output: CommandOutput) -> Self {
        self.outputs.insert(program.to_string(), output);
        self
    }

    pub async fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.read().await.clone()
    }

    pub async fn args_for(&self, program: &str) -> Vec<Vec<String>> {
        self.calls
            .read()
            .await
            .iter()
            .filter(|(p, _)| p == program)
            .map(|(_, args)| args.clone())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, DomainError> {
        self.calls
            .write()
            .await
            .push((program.to_string(), args.to_vec()));

        self.outputs
            .get(program)
            .cloned()
            .ok_or_else(|| DomainError::Spawn {
                program: program.to_string(),
                reason: "No such file or directory".to_string(),
            })
    }
}

pub fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
