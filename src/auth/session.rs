//! In-memory sign-in session.

use tracing::{debug, info};

use super::{AuthStep, CODE_MAX_LEN};

/// Outcome of pressing the wizard's submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The session moved forward by one step.
    Moved {
        /// Step the session was on.
        from: AuthStep,
        /// Step the session is on now.
        to: AuthStep,
    },

    /// The field for this step was empty; nothing changed.
    EmptyField(AuthStep),

    /// The session is already signed in; nothing changed.
    AlreadyAuthenticated,
}

/// Sign-in state and the values entered so far.
///
/// Lives only for the lifetime of the process and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    step: AuthStep,
    phone: String,
    code: String,
    two_fa_code: String,
}

impl Session {
    /// Creates a session waiting for a phone number.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> AuthStep {
        self.step
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.step.is_authenticated()
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn two_fa_code(&self) -> &str {
        &self.two_fa_code
    }

    /// Replaces the phone number field.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Replaces the login code field, keeping at most [`CODE_MAX_LEN`] characters.
    pub fn set_code(&mut self, code: impl Into<String>) {
        let code = code.into();
        self.code = if code.chars().count() > CODE_MAX_LEN {
            code.chars().take(CODE_MAX_LEN).collect()
        } else {
            code
        };
    }

    /// Replaces the two-factor field.
    pub fn set_two_fa_code(&mut self, two_fa_code: impl Into<String>) {
        self.two_fa_code = two_fa_code.into();
    }

    /// Writes the field belonging to the current step.
    ///
    /// Ignored once the session is authenticated.
    pub fn set_current_input(&mut self, value: impl Into<String>) {
        match self.step {
            AuthStep::Phone => self.set_phone(value),
            AuthStep::Code => self.set_code(value),
            AuthStep::TwoFactor => self.set_two_fa_code(value),
            AuthStep::Authenticated => {}
        }
    }

    /// Returns the field belonging to the current step.
    #[must_use]
    pub fn current_input(&self) -> Option<&str> {
        match self.step {
            AuthStep::Phone => Some(&self.phone),
            AuthStep::Code => Some(&self.code),
            AuthStep::TwoFactor => Some(&self.two_fa_code),
            AuthStep::Authenticated => None,
        }
    }

    /// Moves to the next step if the current step's field is non-empty.
    ///
    /// Emptiness is the only check; entered values are never modified.
    pub fn advance(&mut self) -> Advance {
        let from = self.step;

        let Some(to) = from.next() else {
            debug!("Advance ignored: session already authenticated");
            return Advance::AlreadyAuthenticated;
        };

        if self.current_input().is_none_or(str::is_empty) {
            debug!("Advance ignored: {} field is empty", from);
            return Advance::EmptyField(from);
        }

        match from {
            AuthStep::Phone => info!("Phone number accepted: {}", mask_phone(&self.phone)),
            AuthStep::Code => info!("Login code accepted"),
            AuthStep::TwoFactor => info!("Two-factor code accepted, session authenticated"),
            AuthStep::Authenticated => {}
        }

        self.step = to;
        Advance::Moved { from, to }
    }

    /// Handles the log-out control.
    ///
    /// The control is shown on the dashboard but has no effect: an
    /// authenticated session stays authenticated until the process exits.
    /// Returns the step the session is left on.
    pub fn log_out(&self) -> AuthStep {
        debug!("Log out requested; session left at {}", self.step);
        self.step
    }
}

/// Masks a phone number for logging (shows last 4 digits).
pub fn mask_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > 4 {
        format!("***{}", &digits[digits.len() - 4..])
    } else {
        "****".to_owned()
    }
}
