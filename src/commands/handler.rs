//! Dashboard shell command handler.

use tracing::{debug, info};

use super::types::{CommandResult, ShellCommand};
use crate::dashboard::{Dashboard, Tab};

/// Executes shell commands against the dashboard.
#[derive(Debug)]
pub struct CommandHandler {
    dashboard: Dashboard,
}

impl CommandHandler {
    /// Creates a new command handler.
    #[must_use]
    pub const fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }

    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Tries to parse and execute a command from a line of input.
    ///
    /// Returns `None` if the line is not a command.
    pub fn try_handle(&mut self, line: &str) -> Option<CommandResult> {
        let command = ShellCommand::parse(line)?;

        debug!("Handling command: {}", command);
        let result = self.execute(command);
        debug!(
            "Command result: success={}, quit={}",
            result.success, result.quit
        );

        Some(result)
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: ShellCommand) -> CommandResult {
        match command {
            ShellCommand::Open(tab) => self.handle_open(tab),
            ShellCommand::LogOut => self.handle_log_out(),
            ShellCommand::Help => Self::handle_help(),
            ShellCommand::Quit => Self::handle_quit(),
        }
    }

    fn handle_open(&mut self, tab: Tab) -> CommandResult {
        if self.dashboard.select(tab) {
            CommandResult::success(format!("Switched to {}", tab.caption()))
        } else {
            CommandResult::success(format!("Already on {}", tab.caption()))
        }
    }

    fn handle_log_out(&self) -> CommandResult {
        let step = self.dashboard.log_out();
        info!("Log out pressed; session remains {}", step);
        CommandResult::success("")
    }

    fn handle_help() -> CommandResult {
        let mut lines = vec!["TG_CONTROL commands".to_owned(), String::new()];

        for (cmd, aliases, desc) in ShellCommand::all_commands() {
            lines.push(format!("  {cmd} {aliases} - {desc}"));
        }

        CommandResult::success(lines.join("\n"))
    }

    fn handle_quit() -> CommandResult {
        info!("Leaving control panel");
        CommandResult::quit("Session closed.")
    }
}
