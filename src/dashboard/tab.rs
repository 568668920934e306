//! Dashboard tabs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::auth::AuthStep;

/// Errors raised by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Unknown tab: '{0}' (expected logs, commands or settings)")]
    UnknownTab(String),

    #[error("Dashboard is locked until sign-in completes (current step: {0})")]
    NotAuthenticated(AuthStep),
}

/// A dashboard panel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Real-time activity log.
    #[default]
    Logs,

    /// Userbot command reference.
    Commands,

    /// Configuration overview.
    Settings,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::Logs, Self::Commands, Self::Settings];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Logs => "logs",
            Self::Commands => "commands",
            Self::Settings => "settings",
        }
    }

    /// Caption shown in the tab bar.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Logs => "LOGS",
            Self::Commands => "COMMANDS",
            Self::Settings => "SETTINGS",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "logs" | "log" => Ok(Self::Logs),
            "commands" | "cmds" => Ok(Self::Commands),
            "settings" | "config" => Ok(Self::Settings),
            _ => Err(DashboardError::UnknownTab(s.trim().to_owned())),
        }
    }
}
