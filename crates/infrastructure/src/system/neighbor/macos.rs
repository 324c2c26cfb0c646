use async_trait::async_trait;
use ferrous_arp_application::ports::{CommandRunner, NeighborTable};
use ferrous_arp_domain::{
    normalize_ip, normalize_mac, pad_mac_octets, DomainError, NeighborRecord, Platform,
};
use std::sync::Arc;
use tracing::debug;

use super::{check_output, command_args, describe_target, DEFAULT_ARP_COMMAND};

/// `? (10.0.0.9) -- no entry`
const NO_ENTRY_SENTINEL: &str = "no entry";
const INCOMPLETE_MAC: &str = "(incomplete)";

/// macOS ARP cache reader (parses `arp -n <ip>` / `arp -an`)
///
/// `? (192.168.1.1) at 0:11:22:33:44:5 on en0 ifscope [ethernet]`
///
/// BSD `arp` drops leading zeros from octets, so MACs are padded back.
pub struct MacArpTable {
    runner: Arc<dyn CommandRunner>,
    arp_command: String,
}

impl MacArpTable {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            arp_command: DEFAULT_ARP_COMMAND.to_string(),
        }
    }

    pub fn with_arp_command(mut self, arp_command: impl Into<String>) -> Self {
        self.arp_command = arp_command.into();
        self
    }

    /// Positional fields: 0 name, 1 ip, 3 mac, 5 interface.
    pub fn parse(output: &str) -> Vec<NeighborRecord> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let fields: Vec<&str> = line.split_whitespace().collect();

                NeighborRecord {
                    name: fields.first().map(|name| name.to_string()),
                    ip: fields.get(1).map(|ip| normalize_ip(ip).to_string()),
                    mac: fields
                        .get(3)
                        .filter(|mac| **mac != INCOMPLETE_MAC)
                        .map(|mac| pad_mac_octets(&normalize_mac(mac))),
                    interface: fields.get(5).map(|iface| iface.to_string()),
                }
            })
            .collect()
    }

    fn table_args(ip: Option<&str>) -> Vec<String> {
        match ip {
            Some(ip) => command_args(["-n"], Some(ip)),
            None => command_args(["-an"], None),
        }
    }
}

#[async_trait]
impl NeighborTable for MacArpTable {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn probe_args(&self, ip: &str) -> Vec<String> {
        command_args(["-c", "1"], Some(ip))
    }

    async fn read_table(&self, ip: Option<&str>) -> Result<Vec<NeighborRecord>, DomainError> {
        let output = self
            .runner
            .run(&self.arp_command, &Self::table_args(ip))
            .await?;

        // A failed lookup exits 1 with nothing on stderr
        if !output.is_success() && output.stderr.trim().is_empty() {
            return Err(DomainError::NotFound(describe_target(ip)));
        }

        check_output(&output, NO_ENTRY_SENTINEL, ip)?;

        let records = Self::parse(&output.stdout);
        if records.is_empty() {
            return Err(DomainError::NotFound(describe_target(ip)));
        }

        debug!(entries = records.len(), "ARP table parsed");
        Ok(records)
    }
}
