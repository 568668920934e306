//! Dashboard shell shown after sign-in.
//!
//! Three mutually exclusive panels (activity log, command reference and
//! settings) selected by a tab bar. All panel content is fixed sample data.

mod data;
mod render;
mod tab;

pub use data::{
    CommandSpec, LogEntry, LogStatus, SettingsIndicator, SettingsRow, Tone, sample_commands,
    sample_logs, settings_rows,
};
pub use render::{Dashboard, PanelSnapshot, Theme};
pub use tab::{DashboardError, Tab};
