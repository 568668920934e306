//! Text rendering of the dashboard.

use crossterm::style::{Color, Stylize, style};
use serde::Serialize;
use tracing::debug;

use super::data::{
    CommandSpec, LogEntry, SettingsIndicator, SettingsRow, Tone, sample_commands, sample_logs,
    settings_rows,
};
use super::{DashboardError, Tab};
use crate::auth::{AuthStep, Session};

const TITLE: &str = "TG_CONTROL";
const RULE_WIDTH: usize = 60;

/// Output styling for rendered panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// ANSI-coloured output.
    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    /// Plain text output.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Applies the colour for `tone` to `text`.
    #[must_use]
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_owned();
        }

        let color = match tone {
            Tone::Green | Tone::Primary => Color::Green,
            Tone::Blue => Color::Blue,
            Tone::Red => Color::Red,
            Tone::Muted => Color::DarkGrey,
        };

        let styled = style(text).with(color);
        if tone == Tone::Primary {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    fn rule(&self) -> String {
        self.paint(&"─".repeat(RULE_WIDTH), Tone::Muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

/// Serialisable view of the active panel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum PanelSnapshot {
    Logs { entries: &'static [LogEntry] },
    Commands { commands: &'static [CommandSpec] },
    Settings { rows: Vec<SettingsRow> },
}

/// The signed-in dashboard: a session plus the selected tab.
#[derive(Debug, Clone)]
pub struct Dashboard {
    session: Session,
    active: Tab,
}

impl Dashboard {
    /// Opens the dashboard for an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has not finished the sign-in wizard.
    pub fn open(session: Session, active: Tab) -> Result<Self, DashboardError> {
        if !session.is_authenticated() {
            return Err(DashboardError::NotAuthenticated(session.step()));
        }

        debug!("Dashboard opened on {} tab", active);
        Ok(Self { session, active })
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn active(&self) -> Tab {
        self.active
    }

    /// Switches to `tab`. Returns false if it was already active.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        debug!("Switching tab: {} -> {}", self.active, tab);
        self.active = tab;
        true
    }

    /// Presses the log-out control. The session is left untouched.
    pub fn log_out(&self) -> AuthStep {
        self.session.log_out()
    }

    /// Returns the data behind the active panel.
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        match self.active {
            Tab::Logs => PanelSnapshot::Logs {
                entries: sample_logs(),
            },
            Tab::Commands => PanelSnapshot::Commands {
                commands: sample_commands(),
            },
            Tab::Settings => PanelSnapshot::Settings {
                rows: settings_rows(&self.session),
            },
        }
    }

    /// Renders header, tab bar and the active panel.
    #[must_use]
    pub fn render(&self, theme: &Theme) -> String {
        let header = format!(
            "{}  {}    {}",
            theme.paint(TITLE, Tone::Primary),
            theme.paint("● ONLINE", Tone::Primary),
            theme.paint("[LOG OUT]", Tone::Red),
        );

        [
            header,
            self.render_tab_bar(theme),
            theme.rule(),
            self.render_panel(theme),
        ]
        .join("\n")
    }

    /// Renders the tab bar with the active tab bracketed.
    #[must_use]
    pub fn render_tab_bar(&self, theme: &Theme) -> String {
        Tab::ALL
            .iter()
            .map(|&tab| {
                if tab == self.active {
                    theme.paint(&format!("[ {} ]", tab.caption()), Tone::Primary)
                } else {
                    theme.paint(&format!("  {}  ", tab.caption()), Tone::Muted)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders only the active panel.
    #[must_use]
    pub fn render_panel(&self, theme: &Theme) -> String {
        match self.active {
            Tab::Logs => render_logs(sample_logs(), theme),
            Tab::Commands => render_commands(sample_commands(), theme),
            Tab::Settings => render_settings(&settings_rows(&self.session), theme),
        }
    }
}

fn render_logs(logs: &[LogEntry], theme: &Theme) -> String {
    let mut lines = vec![theme.paint("REAL-TIME ACTIVITY", Tone::Primary)];

    for log in logs {
        let tone = log.status.tone();
        lines.push(format!(
            "{} {} {}",
            theme.paint(&format!("[{}]", log.time_label()), Tone::Muted),
            theme.paint(log.action, tone),
            theme.paint(log.status.icon(), tone),
        ));
    }

    lines.join("\n")
}

fn render_commands(commands: &[CommandSpec], theme: &Theme) -> String {
    let mut lines = Vec::new();

    for (i, cmd) in commands.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(theme.paint(&format!("> {}", cmd.name), cmd.color));
        lines.push(format!("  {}", theme.paint(cmd.description, Tone::Muted)));
        lines.push(format!(
            "  {} {}",
            theme.paint("USAGE:", Tone::Muted),
            theme.paint(cmd.usage, Tone::Primary),
        ));
    }

    lines.join("\n")
}

fn render_settings(rows: &[SettingsRow], theme: &Theme) -> String {
    let mut lines = vec![theme.paint("CONFIGURATION", Tone::Primary)];

    for row in rows {
        let indicator = match row.indicator {
            SettingsIndicator::Badge(label) => theme.paint(&format!("[{label}]"), Tone::Primary),
            SettingsIndicator::Outline(label) => theme.paint(&format!("({label})"), Tone::Primary),
            SettingsIndicator::Phone => theme.paint("☎", Tone::Primary),
        };
        lines.push(format!(
            "{:<18} {:<28} {}",
            row.title,
            theme.paint(&row.detail, Tone::Muted),
            indicator,
        ));
    }

    lines.push(String::new());
    lines.push(theme.paint("[END SESSION]", Tone::Red));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard(phone: &str, tab: Tab) -> Dashboard {
        let mut session = Session::new();
        session.set_phone(phone);
        session.advance();
        session.set_code("12345");
        session.advance();
        session.set_two_fa_code("secret");
        session.advance();
        Dashboard::open(session, tab).unwrap()
    }

    #[test]
    fn test_open_requires_authentication() {
        let err = Dashboard::open(Session::new(), Tab::Logs).unwrap_err();
        assert_eq!(err, DashboardError::NotAuthenticated(AuthStep::Phone));
    }

    #[test]
    fn test_logs_panel_renders_fixed_entries_in_order() {
        for phone in ["+7 999 123 45 67", "x"] {
            let panel = dashboard(phone, Tab::Logs).render_panel(&Theme::plain());
            let lines: Vec<&str> = panel.lines().filter(|l| l.starts_with('[')).collect();
            assert_eq!(lines.len(), 5);

            for (line, log) in lines.iter().zip(sample_logs()) {
                assert!(line.contains(&log.time_label()));
                assert!(line.contains(log.action));
                assert!(line.ends_with(log.status.icon()));
            }
        }
    }

    #[test]
    fn test_commands_panel_renders_four_cards() {
        for phone in ["+7 999 123 45 67", "1", " "] {
            let mut dash = dashboard(phone, Tab::Settings);
            dash.select(Tab::Commands);

            let panel = dash.render_panel(&Theme::plain());
            let names: Vec<&str> = panel
                .lines()
                .filter_map(|l| l.strip_prefix("> "))
                .collect();
            assert_eq!(names, ["!bots", "!nick", "!leave", "!info"]);
            assert_eq!(panel.matches("USAGE:").count(), 4);
        }
    }

    #[test]
    fn test_settings_panel_echoes_phone() {
        let panel = dashboard("+7 999 000 11 22", Tab::Settings).render_panel(&Theme::plain());
        assert!(panel.contains("+7 999 000 11 22"));
        assert!(panel.contains("[ACTIVE]"));
        assert!(panel.contains("[END SESSION]"));
    }

    #[test]
    fn test_select_switches_tab() {
        let mut dash = dashboard("1", Tab::Logs);
        assert!(!dash.select(Tab::Logs));
        assert!(dash.select(Tab::Settings));
        assert_eq!(dash.active(), Tab::Settings);
    }

    #[test]
    fn test_tab_bar_marks_active() {
        let dash = dashboard("1", Tab::Commands);
        let bar = dash.render_tab_bar(&Theme::plain());
        assert!(bar.contains("[ COMMANDS ]"));
        assert!(!bar.contains("[ LOGS ]"));
    }

    #[test]
    fn test_render_includes_header() {
        let out = dashboard("1", Tab::Logs).render(&Theme::plain());
        assert!(out.starts_with("TG_CONTROL"));
        assert!(out.contains("● ONLINE"));
        assert!(out.contains("[LOG OUT]"));
    }

    #[test]
    fn test_log_out_keeps_session() {
        let dash = dashboard("1", Tab::Logs);
        assert_eq!(dash.log_out(), AuthStep::Authenticated);
        assert!(dash.session().is_authenticated());
    }

    #[test]
    fn test_plain_theme_has_no_escape_codes() {
        let out = dashboard("1", Tab::Logs).render(&Theme::plain());
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_theme_emits_escape_codes() {
        let painted = Theme::colored().paint("ok", Tone::Green);
        assert!(painted.contains('\u{1b}'));
        assert!(painted.contains("ok"));
    }

    #[test]
    fn test_snapshot_json() {
        let json = serde_json::to_value(dashboard("1", Tab::Commands).snapshot()).unwrap();
        assert_eq!(json["tab"], "commands");
        assert_eq!(json["commands"].as_array().map(Vec::len), Some(4));

        let json = serde_json::to_value(dashboard("+1 202", Tab::Settings).snapshot()).unwrap();
        assert_eq!(json["rows"][1]["detail"], "+1 202");
        assert_eq!(json["rows"][0]["indicator"]["kind"], "badge");
    }
}
