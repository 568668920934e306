//! Dashboard shell command types.

use std::fmt;

use crate::dashboard::Tab;

/// Commands accepted at the dashboard prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Switch to a panel.
    Open(Tab),

    /// Press the log-out control.
    LogOut,

    /// Show help information.
    Help,

    /// Leave the control panel.
    Quit,
}

impl ShellCommand {
    /// Parses a command from a line of input.
    ///
    /// Returns `None` if the line is not a valid command.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        let (cmd, args) = match text.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd.to_lowercase(), Some(args.trim())),
            None => (text.to_lowercase(), None),
        };

        match cmd.as_str() {
            "logs" | "log" | "l" => Some(Self::Open(Tab::Logs)),
            "commands" | "cmds" | "c" => Some(Self::Open(Tab::Commands)),
            "settings" | "config" | "s" => Some(Self::Open(Tab::Settings)),
            "tab" | "open" => args?.parse().ok().map(Self::Open),
            "logout" | "exit-session" | "end" => Some(Self::LogOut),
            "help" | "h" | "?" => Some(Self::Help),
            "quit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "tab",
            Self::LogOut => "logout",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// Returns all available commands with their aliases and descriptions.
    #[must_use]
    pub fn all_commands() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("logs", "(log, l)", "Show the activity log"),
            ("commands", "(cmds, c)", "Show the command reference"),
            ("settings", "(config, s)", "Show the configuration"),
            ("tab <name>", "(open)", "Switch to the named tab"),
            ("logout", "(end)", "End the session"),
            ("help", "(h, ?)", "Show this help message"),
            ("quit", "(q)", "Leave the control panel"),
        ]
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(tab) => write!(f, "tab {tab}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Result of command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command was successful.
    pub success: bool,

    /// Response message to show the user.
    pub message: String,

    /// Whether the shell loop should stop.
    pub quit: bool,
}

impl CommandResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            quit: false,
        }
    }

    /// Creates a successful result that ends the shell loop.
    #[must_use]
    pub fn quit(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            quit: true,
        }
    }
}
