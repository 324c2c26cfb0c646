use async_trait::async_trait;
use ferrous_arp_application::ports::{CommandRunner, NeighborTable};
use ferrous_arp_domain::{normalize_mac, DomainError, NeighborRecord, Platform};
use std::sync::Arc;
use tracing::debug;

use super::{check_output, command_args, describe_target, DEFAULT_ARP_COMMAND};

const NO_ENTRIES_SENTINEL: &str = "No ARP Entries Found";
const INTERFACE_MARKER: &str = "Interface:";
const COLUMN_HEADER: [&str; 5] = ["Internet", "Address", "Physical", "Address", "Type"];

/// Windows ARP cache reader (parses `arp -a <ip>` / `arp -a -v`)
///
/// Entries are grouped under interface headers:
///
/// ```text
/// Interface: 192.168.1.5 --- 0xb
///   Internet Address      Physical Address      Type
///   192.168.1.1           aa-bb-cc-dd-ee-ff     dynamic
/// ```
pub struct WindowsArpTable {
    runner: Arc<dyn CommandRunner>,
    arp_command: String,
}

impl WindowsArpTable {
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

    pub fn parse(output: &str) -> Vec<NeighborRecord> {
        let mut current_interface: Option<String> = None;
        let mut records = Vec::new();

        for line in output.split(|c: char| c == '\r' || c == '\n') {
            let row = line.trim();
            if row.is_empty() {
                continue;
            }

            let parts: Vec<&str> = row.split_whitespace().collect();

            if row.starts_with(INTERFACE_MARKER) {
                current_interface = parts.get(1).map(|iface| iface.to_string());
                continue;
            }

            if parts.starts_with(&COLUMN_HEADER) {
                continue;
            }

            records.push(NeighborRecord {
                name: None,
                ip: parts.first().map(|ip| ip.to_string()),
                mac: parts.get(1).map(|mac| normalize_mac(mac)),
                interface: current_interface.clone(),
            });
        }

        records
    }

    fn table_args(ip: Option<&str>) -> Vec<String> {
        match ip {
            Some(ip) => command_args(["-a"], Some(ip)),
            None => command_args(["-a", "-v"], None),
        }
    }
}

#[async_trait]
impl NeighborTable for WindowsArpTable {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn probe_args(&self, ip: &str) -> Vec<String> {
        command_args(["-n", "1"], Some(ip))
    }

    async fn read_table(&self, ip: Option<&str>) -> Result<Vec<NeighborRecord>, DomainError> {
        let output = self
            .runner
            .run(&self.arp_command, &Self::table_args(ip))
            .await?;

        check_output(&output, NO_ENTRIES_SENTINEL, ip)?;

        let records = Self::parse(&output.stdout);
        if records.is_empty() {
            return Err(DomainError::NotFound(describe_target(ip)));
        }

        debug!(entries = records.len(), "ARP table parsed");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_sets_interface() {
        let records = WindowsArpTable::parse(
            "Interface: wlan0\r\n  10.0.0.1   aa:bb:cc:dd:ee:ff   dynamic\r\n",
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].interface.as_deref(), Some("wlan0"));
        assert_eq!(records[0].ip.as_deref(), Some("10.0.0.1"));
        assert!(records[0].name.is_none());
    }

    #[test]
    fn test_column_header_is_skipped() {
        let records = WindowsArpTable::parse(
            "Interface: 10.0.0.5 --- 0x3\r\n  Internet Address      Physical Address      Type\r\n",
        );

        assert!(records.is_empty());
    }

    #[test]
    fn test_single_field_row_has_no_mac() {
        let records = WindowsArpTable::parse("Interface: 10.0.0.5 --- 0x3\r\n  10.0.0.9\r\n");

        assert_eq!(records[0].ip.as_deref(), Some("10.0.0.9"));
        assert!(records[0].mac.is_none());
    }

    #[test]
    fn test_rows_before_any_header_have_no_interface() {
        let records = WindowsArpTable::parse("10.0.0.1  aa-bb-cc-dd-ee-ff  dynamic\r\n");

        assert!(records[0].interface.is_none());
        assert_eq!(records[0].mac.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
    }
}
