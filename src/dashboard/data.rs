//! Fixed sample content of the dashboard panels.

use chrono::NaiveTime;
use serde::Serialize;

use crate::auth::{PHONE_PLACEHOLDER, Session};

/// Accent colour of a piece of dashboard text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Red,
    Primary,
    Muted,
}

/// Outcome recorded for a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Warning,
}

impl LogStatus {
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Success => Tone::Green,
            Self::Warning => Tone::Red,
        }
    }

    /// Status icon shown at the end of a log line.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
        }
    }
}

/// A line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Time of day the action happened.
    #[serde(serialize_with = "serialize_time")]
    pub time: NaiveTime,

    /// What happened.
    pub action: &'static str,

    pub status: LogStatus,
}

impl LogEntry {
    /// Returns the time formatted as `HH:MM:SS`.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

fn serialize_time<S: serde::Serializer>(
    time: &NaiveTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M:%S"))
}

/// A userbot command shown on the command reference panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub color: Tone,
}

/// Right-hand indicator of a settings row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "label")]
pub enum SettingsIndicator {
    /// Filled badge.
    Badge(&'static str),
    /// Outlined badge.
    Outline(&'static str),
    /// Phone icon.
    Phone,
}

/// A row of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsRow {
    pub title: &'static str,
    pub detail: String,
    pub indicator: SettingsIndicator,
}

const fn at(hour: u32, min: u32, sec: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(time) => time,
        None => panic!("invalid sample log time"),
    }
}

const LOGS: [LogEntry; 5] = [
    LogEntry {
        time: at(14, 32, 1),
        action: "Command !bots executed in chat \"Development\"",
        status: LogStatus::Success,
    },
    LogEntry {
        time: at(14, 31, 45),
        action: "Nickname changed: User -> CyberUser",
        status: LogStatus::Success,
    },
    LogEntry {
        time: at(14, 30, 22),
        action: "Request !info @johndoe",
        status: LogStatus::Success,
    },
    LogEntry {
        time: at(14, 29, 10),
        action: "Left chat \"Spam Group\"",
        status: LogStatus::Warning,
    },
    LogEntry {
        time: at(14, 28, 3),
        action: "Connected to Telegram",
        status: LogStatus::Success,
    },
];

const COMMANDS: [CommandSpec; 4] = [
    CommandSpec {
        name: "!bots",
        description: "Shows all bots in the chat",
        usage: "!bots",
        color: Tone::Green,
    },
    CommandSpec {
        name: "!nick",
        description: "Changes your Telegram nickname",
        usage: "!nick \"new name\"",
        color: Tone::Blue,
    },
    CommandSpec {
        name: "!leave",
        description: "Leaves the chat automatically",
        usage: "!leave",
        color: Tone::Red,
    },
    CommandSpec {
        name: "!info",
        description: "Shows a user's ID and phone number",
        usage: "!info \"username\"",
        color: Tone::Blue,
    },
];

/// Returns the activity log, newest first.
#[must_use]
pub fn sample_logs() -> &'static [LogEntry] {
    &LOGS
}

/// Returns the command reference.
#[must_use]
pub fn sample_commands() -> &'static [CommandSpec] {
    &COMMANDS
}

/// Builds the settings rows, echoing the session's phone number.
#[must_use]
pub fn settings_rows(session: &Session) -> Vec<SettingsRow> {
    let phone = if session.phone().is_empty() {
        PHONE_PLACEHOLDER
    } else {
        session.phone()
    };

    vec![
        SettingsRow {
            title: "Bot status",
            detail: "Activity control".to_owned(),
            indicator: SettingsIndicator::Badge("ACTIVE"),
        },
        SettingsRow {
            title: "Phone number",
            detail: phone.to_owned(),
            indicator: SettingsIndicator::Phone,
        },
        SettingsRow {
            title: "Command autorun",
            detail: "Instant execution".to_owned(),
            indicator: SettingsIndicator::Outline("ON"),
        },
        SettingsRow {
            title: "Logging",
            detail: "Records every action".to_owned(),
            indicator: SettingsIndicator::Outline("ON"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_logs_fixed_order() {
        let logs = sample_logs();
        assert_eq!(logs.len(), 5);

        let times: Vec<String> = logs.iter().map(LogEntry::time_label).collect();
        assert_eq!(
            times,
            ["14:32:01", "14:31:45", "14:30:22", "14:29:10", "14:28:03"]
        );
    }

    #[test]
    fn test_only_leave_is_a_warning() {
        let warnings: Vec<&str> = sample_logs()
            .iter()
            .filter(|log| log.status == LogStatus::Warning)
            .map(|log| log.action)
            .collect();
        assert_eq!(warnings, ["Left chat \"Spam Group\""]);
    }

    #[test]
    fn test_sample_commands() {
        let names: Vec<&str> = sample_commands().iter().map(|cmd| cmd.name).collect();
        assert_eq!(names, ["!bots", "!nick", "!leave", "!info"]);
        assert!(sample_commands().iter().all(|cmd| cmd.usage.starts_with(cmd.name)));
    }

    #[test]
    fn test_settings_echo_phone() {
        let mut session = Session::new();
        session.set_phone("+44 20 7946 0000");

        let rows = settings_rows(&session);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].detail, "+44 20 7946 0000");
    }

    #[test]
    fn test_settings_placeholder_without_phone() {
        let rows = settings_rows(&Session::new());
        assert_eq!(rows[1].detail, PHONE_PLACEHOLDER);
    }

    #[test]
    fn test_log_entry_serializes_time_label() {
        let json = serde_json::to_value(&sample_logs()[0]).unwrap();
        assert_eq!(json["time"], "14:32:01");
        assert_eq!(json["status"], "success");
    }
}
