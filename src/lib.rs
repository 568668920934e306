//! TG Control Library
//!
//! A terminal mockup of a Telegram automation control panel.
//!
//! This crate provides:
//! - The phone / code / 2FA sign-in wizard
//! - The dashboard with its activity log, command reference and settings panels
//! - The line commands used to drive the dashboard
//! - Environment-driven panel settings

pub mod auth;
pub mod commands;
pub mod config;
pub mod dashboard;
