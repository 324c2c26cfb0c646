use ferrous_arp_domain::{DomainError, NeighborRecord};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{CommandRunner, NeighborTable};

const DEFAULT_PING_COMMAND: &str = "ping";

/// Use case: Resolve the MAC address of a single IP
///
/// Pings the address once so the OS refreshes its neighbor cache, then reads
/// the cache entry. The ping result is never surfaced.
pub struct ResolveMacUseCase {
    table: Arc<dyn NeighborTable>,
    runner: Arc<dyn CommandRunner>,
    ping_command: String,
}

impl ResolveMacUseCase {
    pub fn new(table: Arc<dyn NeighborTable>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            table,
            runner,
            ping_command: DEFAULT_PING_COMMAND.to_string(),
        }
    }

    pub fn with_ping_command(mut self, ping_command: impl Into<String>) -> Self {
        self.ping_command = ping_command.into();
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, ip: &str) -> Result<NeighborRecord, DomainError> {
        self.probe(ip).await;

        let records = self.table.read_table(Some(ip)).await?;
        let total = records.len();

        let record = records
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NoResult(ip.to_string()))?;

        info!(
            ip = %ip,
            mac = record.mac.as_deref().unwrap_or("-"),
            entries = total,
            platform = %self.table.platform(),
            "MAC address resolved"
        );

        Ok(record)
    }

    async fn probe(&self, ip: &str) {
        let args = self.table.probe_args(ip);

        // Only the cache-warming side effect matters here
        match self.runner.run(&self.ping_command, &args).await {
            Ok(output) => {
                debug!(ip = %ip, code = ?output.code, "Probe finished");
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "Probe failed, reading table anyway");
            }
        }
    }
}
