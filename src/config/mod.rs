//! Configuration module for the control panel.
//!
//! Handles loading panel settings from the environment.

mod settings;

pub use settings::{ConfigError, PanelSettings};
