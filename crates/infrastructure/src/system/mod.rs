pub mod command_runner;
pub mod neighbor;

pub use command_runner::TokioCommandRunner;
pub use neighbor::{LinuxArpTable, MacArpTable, NeighborTableRegistry, WindowsArpTable};
