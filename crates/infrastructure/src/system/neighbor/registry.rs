use ferrous_arp_application::ports::{CommandRunner, NeighborTable};
use ferrous_arp_domain::{DomainError, Platform};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

use super::{LinuxArpTable, MacArpTable, WindowsArpTable, DEFAULT_ARP_COMMAND};

/// Builds a table reader from the shared runner and the `arp` program name.
pub type TableFactory = fn(Arc<dyn CommandRunner>, &str) -> Arc<dyn NeighborTable>;

/// Lookup table from platform to neighbor table variant.
pub struct NeighborTableRegistry {
    factories: HashMap<Platform, TableFactory>,
    arp_command: String,
}

impl NeighborTableRegistry {
    /// An empty registry; every platform is unsupported until registered.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            arp_command: DEFAULT_ARP_COMMAND.to_string(),
        }
    }

    /// Linux, Windows and macOS.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Platform::Linux, linux_table);
        registry.register(Platform::Windows, windows_table);
        registry.register(Platform::MacOs, macos_table);
        registry
    }

    pub fn with_arp_command(mut self, arp_command: impl Into<String>) -> Self {
        self.arp_command = arp_command.into();
        self
    }

    /// Registers `factory` for `platform`, replacing any previous entry.
    pub fn register(&mut self, platform: Platform, factory: TableFactory) {
        self.factories.insert(platform, factory);
    }

    pub fn is_supported(&self, platform: &Platform) -> bool {
        self.factories.contains_key(platform)
    }

    pub fn select(
        &self,
        platform: &Platform,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Arc<dyn NeighborTable>, DomainError> {
        let factory = self.factories.get(platform).ok_or_else(|| {
            error!(platform = %platform, "No neighbor table registered for platform");
            DomainError::UnsupportedPlatform(platform.to_string())
        })?;

        debug!(platform = %platform, arp_command = %self.arp_command, "Neighbor table selected");
        Ok(factory(runner, &self.arp_command))
    }

    /// Selects the variant for the platform this process runs on.
    pub fn select_current(
        &self,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Arc<dyn NeighborTable>, DomainError> {
        self.select(&Platform::current(), runner)
    }
}

impl Default for NeighborTableRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn linux_table(runner: Arc<dyn CommandRunner>, arp_command: &str) -> Arc<dyn NeighborTable> {
    Arc::new(LinuxArpTable::new(runner).with_arp_command(arp_command))
}

fn windows_table(runner: Arc<dyn CommandRunner>, arp_command: &str) -> Arc<dyn NeighborTable> {
    Arc::new(WindowsArpTable::new(runner).with_arp_command(arp_command))
}

fn macos_table(runner: Arc<dyn CommandRunner>, arp_command: &str) -> Arc<dyn NeighborTable> {
    Arc::new(MacArpTable::new(runner).with_arp_command(arp_command))
}
