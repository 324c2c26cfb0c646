use ferrous_arp_application::ports::CommandRunner;
use ferrous_arp_application::use_cases::{ResolveMacUseCase, ResolveTableUseCase};
use ferrous_arp_domain::{Config, DomainError};
use ferrous_arp_infrastructure::system::{NeighborTableRegistry, TokioCommandRunner};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_mac: Arc<ResolveMacUseCase>,
    pub resolve_table: Arc<ResolveTableUseCase>,
}

impl UseCases {
    /// Picks the neighbor table for the running platform once, up front.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let runner: Arc<dyn CommandRunner> = Arc::new(TokioCommandRunner::with_timeout(
            config.resolver.command_timeout(),
        ));

        let table = NeighborTableRegistry::with_defaults()
            .with_arp_command(config.resolver.arp_command.as_str())
            .select_current(runner.clone())?;

        Ok(Self {
            resolve_mac: Arc::new(
                ResolveMacUseCase::new(table.clone(), runner)
                    .with_ping_command(config.resolver.ping_command.as_str()),
            ),
            resolve_table: Arc::new(ResolveTableUseCase::new(table)),
        })
    }
}
