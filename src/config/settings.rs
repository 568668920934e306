//! Control panel settings.

use crate::dashboard::{DashboardError, Tab};

const DEFAULT_TAB_VAR: &str = "TG_CONTROL_DEFAULT_TAB";
const LOG_LEVEL_VAR: &str = "TG_CONTROL_LOG_LEVEL";
const NO_COLOR_VAR: &str = "NO_COLOR";

/// Settings for the control panel, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSettings {
    /// Tab shown right after sign-in.
    pub default_tab: Tab,

    /// Whether panels and log lines are rendered with ANSI colours.
    pub color: bool,

    /// Log level for the application.
    pub log_level: String,
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            default_tab: Tab::default(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl PanelSettings {
    /// Creates settings from environment variables.
    ///
    /// Reads `TG_CONTROL_DEFAULT_TAB`, `TG_CONTROL_LOG_LEVEL` and `NO_COLOR`.
    ///
    /// # Errors
    ///
    /// Returns an error if `TG_CONTROL_DEFAULT_TAB` names an unknown tab.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates settings from environment variables, falling back to the
    /// default tab if `TG_CONTROL_DEFAULT_TAB` is invalid.
    ///
    /// The other variables are still honoured in that case. The error is
    /// returned alongside so it can be reported once logging is up.
    #[must_use]
    pub fn from_env_with_defaults() -> (Self, Option<ConfigError>) {
        Self::from_lookup_with_defaults(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_lookup`], but an invalid default tab is replaced by
    /// [`Tab::default`] instead of failing.
    #[must_use]
    pub fn from_lookup_with_defaults(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Option<ConfigError>) {
        match Self::from_lookup(&lookup) {
            Ok(settings) => (settings, None),
            Err(e) => {
                let settings = Self {
                    default_tab: Tab::default(),
                    color: lookup(NO_COLOR_VAR).is_none(),
                    log_level: lookup(LOG_LEVEL_VAR).unwrap_or_else(default_log_level),
                };
                (settings, Some(e))
            }
        }
    }

    /// Creates settings from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the default tab names an unknown tab.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_tab = match lookup(DEFAULT_TAB_VAR) {
            Some(name) => name.parse().map_err(ConfigError::InvalidDefaultTab)?,
            None => Tab::default(),
        };

        Ok(Self {
            default_tab,
            color: lookup(NO_COLOR_VAR).is_none(),
            log_level: lookup(LOG_LEVEL_VAR).unwrap_or_else(default_log_level),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TG_CONTROL_DEFAULT_TAB: {0}")]
    InvalidDefaultTab(#[source] DashboardError),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = PanelSettings::default();
        assert_eq!(settings.default_tab, Tab::Logs);
        assert!(settings.color);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_empty_environment_matches_defaults() {
        let settings = PanelSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, PanelSettings::default());
    }

    #[test]
    fn test_from_lookup() {
        let settings = PanelSettings::from_lookup(lookup(&[
            ("TG_CONTROL_DEFAULT_TAB", "settings"),
            ("TG_CONTROL_LOG_LEVEL", "debug"),
            ("NO_COLOR", "1"),
        ]))
        .unwrap();

        assert_eq!(settings.default_tab, Tab::Settings);
        assert!(!settings.color);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_invalid_default_tab() {
        let err = PanelSettings::from_lookup(lookup(&[("TG_CONTROL_DEFAULT_TAB", "stats")]))
            .unwrap_err();
        assert!(err.to_string().contains("TG_CONTROL_DEFAULT_TAB"));
    }

    #[test]
    fn test_invalid_default_tab_keeps_other_settings() {
        let (settings, err) = PanelSettings::from_lookup_with_defaults(lookup(&[
            ("TG_CONTROL_DEFAULT_TAB", "bogus"),
            ("TG_CONTROL_LOG_LEVEL", "debug"),
            ("NO_COLOR", "1"),
        ]));

        assert!(err.is_some());
        assert_eq!(settings.default_tab, Tab::Logs);
        assert_eq!(settings.log_level, "debug");
        assert!(!settings.color);
    }

    #[test]
    fn test_valid_lookup_with_defaults_reports_no_error() {
        let (settings, err) = PanelSettings::from_lookup_with_defaults(lookup(&[(
            "TG_CONTROL_DEFAULT_TAB",
            "commands",
        )]));

        assert!(err.is_none());
        assert_eq!(settings.default_tab, Tab::Commands);
        assert_eq!(settings.log_level, "warn");
    }
}
