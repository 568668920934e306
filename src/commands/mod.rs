//! Command handling module.
//!
//! Parses and executes the line commands typed at the dashboard
//! prompt to switch tabs and press the panel's controls.

mod handler;
mod types;

pub use handler::CommandHandler;
pub use types::{CommandResult, ShellCommand};
