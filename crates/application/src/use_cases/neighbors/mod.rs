pub mod resolve_mac;
pub mod resolve_table;

pub use resolve_mac::ResolveMacUseCase;
pub use resolve_table::ResolveTableUseCase;
