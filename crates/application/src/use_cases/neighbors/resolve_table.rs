use ferrous_arp_domain::{DomainError, NeighborRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::NeighborTable;

/// Use case: Dump the neighbor cache, optionally scoped to one address
pub struct ResolveTableUseCase {
    table: Arc<dyn NeighborTable>,
}

impl ResolveTableUseCase {
    pub fn new(table: Arc<dyn NeighborTable>) -> Self {
        Self { table }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, ip: Option<&str>) -> Result<Vec<NeighborRecord>, DomainError> {
        let records = self.table.read_table(ip).await?;

        debug!(
            platform = %self.table.platform(),
            entries = records.len(),
            complete = records.iter().filter(|r| r.is_complete()).count(),
            "Neighbor table read"
        );

        Ok(records)
    }
}
