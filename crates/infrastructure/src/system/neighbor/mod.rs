//! Per-platform neighbor cache readers.
//!
//! Each variant shells out to the platform's `arp` and parses whatever text
//! layout that platform prints. The [`NeighborTableRegistry`] picks one at
//! startup from the runtime platform.

pub mod linux;
pub mod macos;
pub mod registry;
pub mod windows;

pub use linux::LinuxArpTable;
pub use macos::MacArpTable;
pub use registry::NeighborTableRegistry;
pub use windows::WindowsArpTable;

use ferrous_arp_application::ports::CommandOutput;
use ferrous_arp_domain::DomainError;

pub(crate) const DEFAULT_ARP_COMMAND: &str = "arp";

/// Label used in `NotFound` errors for an unscoped dump.
pub(crate) fn describe_target(ip: Option<&str>) -> String {
    ip.unwrap_or("all entries").to_string()
}

/// The sentinel wins over the exit code: some platforms exit non-zero when
/// the address simply has no entry.
pub(crate) fn check_output(
    output: &CommandOutput,
    sentinel: &str,
    ip: Option<&str>,
) -> Result<(), DomainError> {
    if output.contains(sentinel) {
        return Err(DomainError::NotFound(describe_target(ip)));
    }

    if !output.is_success() {
        return Err(DomainError::Command {
            code: output.code,
            stderr: output.stderr.clone(),
        });
    }

    Ok(())
}

pub(crate) fn command_args<const N: usize>(fixed: [&str; N], ip: Option<&str>) -> Vec<String> {
    fixed
        .iter()
        .copied()
        .chain(ip)
        .map(str::to_string)
        .collect()
}
