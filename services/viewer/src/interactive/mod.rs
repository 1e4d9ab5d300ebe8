pub mod command_loop;
pub mod protocol;

pub use command_loop::{handle_command, run};
pub use protocol::{ClientCommand, ViewMessage};
