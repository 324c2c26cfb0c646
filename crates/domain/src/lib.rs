//! Ferrous ARP Domain Layer
pub mod config;
pub mod errors;
pub mod neighbor;
pub mod normalize;
pub mod platform;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use errors::DomainError;
pub use neighbor::NeighborRecord;
pub use normalize::{normalize_ip, normalize_mac, pad_mac_octets};
pub use platform::Platform;
