//! Sign-in wizard module.
//!
//! Walks a session through the phone, login code and 2FA steps
//! before the dashboard is unlocked.

mod session;
mod step;

pub use session::{Advance, Session, mask_phone};
pub use step::{AuthStep, ParseStepError};

/// Maximum number of characters kept for the login code.
pub const CODE_MAX_LEN: usize = 5;

/// Placeholder shown in place of a phone number that was never entered.
pub const PHONE_PLACEHOLDER: &str = "+7 999 123 45 67";
