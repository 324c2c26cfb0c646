use serde::{Deserialize, Serialize};

/// One row of the OS neighbor (ARP) cache.
///
/// Fields a platform does not print, or a row is too short to carry, are
/// `None` rather than causing the row to be dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborRecord {
    pub name: Option<String>,
    pub ip: Option<String>,
    pub mac: Option<String>,
    pub interface: Option<String>,
}

impl NeighborRecord {
    pub fn new(ip: impl Into<String>, mac: impl Into<String>) -> Self {
        Self {
            name: None,
            ip: Some(ip.into()),
            mac: Some(mac.into()),
            interface: None,
        }
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// An entry is complete when both its address and hardware address parsed.
    pub fn is_complete(&self) -> bool {
        self.ip.is_some() && self.mac.is_some()
    }
}
