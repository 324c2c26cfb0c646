use async_trait::async_trait;
use ferrous_arp_application::ports::{CommandRunner, NeighborTable};
use ferrous_arp_domain::{normalize_ip, normalize_mac, DomainError, NeighborRecord, Platform};
use std::sync::Arc;
use tracing::debug;

use super::{check_output, command_args, describe_target, DEFAULT_ARP_COMMAND};

/// Printed by net-tools `arp -a <ip>` when the address has no entry.
const NO_MATCH_SENTINEL: &str = "no match found";
const INCOMPLETE_MAC: &str = "<incomplete>";

/// Linux ARP cache reader (parses `arp -a [ip]`)
///
/// One entry per line:
/// `gateway (10.0.0.138) at e8:fc:af:a1:f7:17 [ether] on wlan0`
pub struct LinuxArpTable {
    runner: Arc<dyn CommandRunner>,
    arp_command: String,
}

impl LinuxArpTable {
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

    /// Positional fields: 0 name, 1 ip, 3 mac, 6 interface. Short lines keep
    /// whatever fields they have.
    pub fn parse(output: &str) -> Vec<NeighborRecord> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> NeighborRecord {
        let fields: Vec<&str> = line.split_whitespace().collect();

        NeighborRecord {
            name: fields.first().map(|name| name.to_string()),
            ip: fields.get(1).map(|ip| normalize_ip(ip).to_string()),
            mac: fields
                .get(3)
                .filter(|mac| **mac != INCOMPLETE_MAC)
                .map(|mac| normalize_mac(mac)),
            interface: fields.get(6).map(|iface| iface.to_string()),
        }
    }
}

#[async_trait]
impl NeighborTable for LinuxArpTable {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn probe_args(&self, ip: &str) -> Vec<String> {
        command_args(["-c", "1"], Some(ip))
    }

    async fn read_table(&self, ip: Option<&str>) -> Result<Vec<NeighborRecord>, DomainError> {
        let output = self
            .runner
            .run(&self.arp_command, &command_args(["-a"], ip))
            .await?;

        check_output(&output, NO_MATCH_SENTINEL, ip)?;

        let records = Self::parse(&output.stdout);
        if records.is_empty() {
            return Err(DomainError::NotFound(describe_target(ip)));
        }

        debug!(entries = records.len(), "ARP table parsed");
        Ok(records)
    }
}
