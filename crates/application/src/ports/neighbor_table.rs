use async_trait::async_trait;
use ferrous_arp_domain::{DomainError, NeighborRecord, Platform};

/// Per-platform access to the OS neighbor cache.
#[async_trait]
pub trait NeighborTable: Send + Sync {
    fn platform(&self) -> Platform;

    /// Arguments for a single ICMP echo to `ip` with this platform's `ping`.
    fn probe_args(&self, ip: &str) -> Vec<String>;

    /// Dumps the cache, scoped to `ip` when given.
    ///
    /// Fails with `NotFound` when the command reports no entry or nothing
    /// parseable remains, and with `Command` on a non-zero exit.
    async fn read_table(&self, ip: Option<&str>) -> Result<Vec<NeighborRecord>, DomainError>;
}
