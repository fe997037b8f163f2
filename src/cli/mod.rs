// Gateway module for the command-line surface

mod args;
mod commands;

pub use args::{Cli, Commands};
pub use commands::handle_command;
