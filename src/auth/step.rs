//! Wizard steps and their prompt texts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PHONE_PLACEHOLDER;

/// Error returned when a step name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown auth step: '{0}'")]
pub struct ParseStepError(pub String);

/// A step of the sign-in wizard.
///
/// Steps only ever move forward: `phone → code → 2fa → authenticated`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum AuthStep {
    /// Waiting for the phone number.
    #[default]
    #[serde(rename = "phone")]
    Phone,

    /// Waiting for the login code sent to the Telegram app.
    #[serde(rename = "code")]
    Code,

    /// Waiting for the two-factor password.
    #[serde(rename = "2fa")]
    TwoFactor,

    /// Signed in. Absorbing for the lifetime of the session.
    #[serde(rename = "authenticated")]
    Authenticated,
}

impl AuthStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 4] = [Self::Phone, Self::Code, Self::TwoFactor, Self::Authenticated];

    /// Returns the step that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Phone => Some(Self::Code),
            Self::Code => Some(Self::TwoFactor),
            Self::TwoFactor => Some(Self::Authenticated),
            Self::Authenticated => None,
        }
    }

    /// Returns the wire name of the step.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Code => "code",
            Self::TwoFactor => "2fa",
            Self::Authenticated => "authenticated",
        }
    }

    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Instruction line shown above the input field.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Phone => "> Enter your phone number to sign in",
            Self::Code => "> Enter the confirmation code from Telegram",
            Self::TwoFactor => "> Enter your two-factor authentication code",
            Self::Authenticated => "",
        }
    }

    /// Label of the input field.
    #[must_use]
    pub const fn field_label(self) -> &'static str {
        match self {
            Self::Phone => "PHONE_NUMBER",
            Self::Code => "VERIFICATION_CODE",
            Self::TwoFactor => "TWO_FACTOR_AUTH",
            Self::Authenticated => "",
        }
    }

    /// Example value hinted in the input field.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Phone => PHONE_PLACEHOLDER,
            Self::Code => "12345",
            Self::TwoFactor => "Password or code from email",
            Self::Authenticated => "",
        }
    }

    /// Caption of the submit control.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Phone => "SEND CODE",
            Self::Code => "CONFIRM",
            Self::TwoFactor => "SIGN IN",
            Self::Authenticated => "",
        }
    }

    /// Whether the input should be hidden while typing.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::TwoFactor)
    }
}

impl fmt::Display for AuthStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AuthStep {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStepError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_linear() {
        assert_eq!(AuthStep::Phone.next(), Some(AuthStep::Code));
        assert_eq!(AuthStep::Code.next(), Some(AuthStep::TwoFactor));
        assert_eq!(AuthStep::TwoFactor.next(), Some(AuthStep::Authenticated));
        assert_eq!(AuthStep::Authenticated.next(), None);
    }

    #[test]
    fn test_order_matches_next() {
        for pair in AuthStep::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("phone".parse(), Ok(AuthStep::Phone));
        assert_eq!("2FA".parse(), Ok(AuthStep::TwoFactor));
        assert_eq!(" authenticated ".parse(), Ok(AuthStep::Authenticated));
        assert_eq!(
            "password".parse::<AuthStep>(),
            Err(ParseStepError("password".to_owned()))
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&AuthStep::TwoFactor).unwrap();
        assert_eq!(json, "\"2fa\"");

        let step: AuthStep = serde_json::from_str("\"code\"").unwrap();
        assert_eq!(step, AuthStep::Code);
    }

    #[test]
    fn test_only_two_factor_is_secret() {
        assert!(AuthStep::TwoFactor.is_secret());
        assert!(!AuthStep::Phone.is_secret());
        assert!(!AuthStep::Code.is_secret());
    }
}
