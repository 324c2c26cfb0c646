use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// ICMP echo utility used for the cache-warming probe
    #[serde(default = "default_ping_command")]
    pub ping_command: String,

    /// Neighbor cache dump utility
    #[serde(default = "default_arp_command")]
    pub arp_command: String,

    /// Upper bound on each external command. Unset means wait until exit.
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,
}

impl ResolverConfig {
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ping_command: default_ping_command(),
            arp_command: default_arp_command(),
            command_timeout_secs: None,
        }
    }
}

fn default_ping_command() -> String {
    "ping".to_string()
}

fn default_arp_command() -> String {
    "arp".to_string()
}
