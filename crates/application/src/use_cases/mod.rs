pub mod neighbors;

pub use neighbors::{ResolveMacUseCase, ResolveTableUseCase};
