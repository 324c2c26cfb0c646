mod command_runner;
mod neighbor_table;

pub use command_runner::{CommandOutput, CommandRunner};
pub use neighbor_table::NeighborTable;
