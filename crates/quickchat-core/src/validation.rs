//! Message validation: payload length and recipient shape.
//!
//! Each rule comes in two forms. `validate_*` returns a typed
//! [`ValidationError`] for callers that branch on failure; `check_*` renders
//! the outcome as a [`Check`] for display. Neither form ever blocks record
//! construction: invalid values are stored as given and only reported here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Maximum payload length, in characters, for a message to be sendable.
pub const MAX_PAYLOAD_CHARS: usize = 250;

/// International dialling code recipients must carry.
pub const DEFAULT_COUNTRY_CODE: &str = "27";

/// Digits that follow the country code in a subscriber number.
const SUBSCRIBER_DIGITS: usize = 9;

const PAYLOAD_READY: &str = "Message ready to send.";
const RECIPIENT_CAPTURED: &str = "Cell phone number successfully captured.";

/// Outcome of a validation rule, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub ok: bool,
    pub message: String,
}

impl Check {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Render a typed result, using `success` as the passing message.
    pub fn from_result<E: fmt::Display>(result: Result<(), E>, success: &str) -> Self {
        match result {
            Ok(()) => Self::pass(success),
            Err(e) => Self::fail(e.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Deployment-specific validation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Country code without the leading `+`.
    pub country_code: String,
    /// Maximum payload length in characters.
    pub max_payload_chars: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            max_payload_chars: MAX_PAYLOAD_CHARS,
        }
    }
}

impl Rules {
    /// Check that `payload` is present and not blank.
    pub fn validate_not_empty(&self, payload: Option<&str>) -> Result<(), ValidationError> {
        match payload {
            Some(p) if !p.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::EmptyPayload),
        }
    }

    /// Check that `payload` is present and within the length limit.
    ///
    /// A missing payload reports an excess of `-limit`; existing callers
    /// depend on that message.
    pub fn validate_payload_length(&self, payload: Option<&str>) -> Result<(), ValidationError> {
        let limit = self.max_payload_chars;
        let Some(payload) = payload else {
            return Err(ValidationError::PayloadTooLong {
                limit,
                excess: -(limit as i64),
            });
        };
        let len = payload.chars().count();
        if len <= limit {
            Ok(())
        } else {
            Err(ValidationError::PayloadTooLong {
                limit,
                excess: (len - limit) as i64,
            })
        }
    }

    /// Check that `recipient` is `+<country code><9 digits>`.
    ///
    /// Missing and blank recipients fail the same way as malformed ones.
    pub fn validate_recipient_format(
        &self,
        recipient: Option<&str>,
    ) -> Result<(), ValidationError> {
        let number = recipient
            .and_then(|r| r.strip_prefix('+'))
            .and_then(|r| r.strip_prefix(self.country_code.as_str()))
            .ok_or(ValidationError::InvalidRecipient)?;

        if self.country_code.is_empty()
            || number.len() != SUBSCRIBER_DIGITS
            || !number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::InvalidRecipient);
        }
        Ok(())
    }

    pub fn check_payload_length(&self, payload: Option<&str>) -> Check {
        Check::from_result(self.validate_payload_length(payload), PAYLOAD_READY)
    }

    pub fn check_recipient_format(&self, recipient: Option<&str>) -> Check {
        Check::from_result(self.validate_recipient_format(recipient), RECIPIENT_CAPTURED)
    }
}

/// [`Rules::validate_payload_length`] with the default rules.
pub fn validate_payload_length(payload: Option<&str>) -> Result<(), ValidationError> {
    Rules::default().validate_payload_length(payload)
}

/// [`Rules::validate_recipient_format`] with the default rules.
pub fn validate_recipient_format(recipient: Option<&str>) -> Result<(), ValidationError> {
    Rules::default().validate_recipient_format(recipient)
}

/// [`Rules::check_payload_length`] with the default rules.
pub fn check_payload_length(payload: Option<&str>) -> Check {
    Rules::default().check_payload_length(payload)
}

/// [`Rules::check_recipient_format`] with the default rules.
pub fn check_recipient_format(recipient: Option<&str>) -> Check {
    Rules::default().check_recipient_format(recipient)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAD_NUMBER: &str = "Cell phone number is incorrectly formatted or does not contain an international code. Please correct the number and try again.";

    #[test]
    fn test_blank_payload_is_empty() {
        let rules = Rules::default();
        assert!(rules.validate_not_empty(Some("Hi tonight")).is_ok());
        for payload in [None, Some(""), Some("  \t\n")] {
            assert_eq!(rules.validate_not_empty(payload), Err(ValidationError::EmptyPayload));
        }
        assert_eq!(
            ValidationError::EmptyPayload.to_string(),
            "Message content cannot be empty"
        );
    }

    #[test]
    fn test_payload_at_limit_passes() {
        let payload = "a".repeat(250);
        let check = check_payload_length(Some(&payload));
        assert!(check.ok);
        assert_eq!(check.message, "Message ready to send.");
    }

    #[test]
    fn test_payload_over_limit_reports_excess() {
        let payload = "a".repeat(251);
        let check = check_payload_length(Some(&payload));
        assert!(!check.ok);
        assert_eq!(
            check.message,
            "Message exceeds 250 characters by 1, please reduce size."
        );

        let result = validate_payload_length(Some(&"b".repeat(300)));
        assert_eq!(
            result,
            Err(ValidationError::PayloadTooLong {
                limit: 250,
                excess: 50
            })
        );
    }

    #[test]
    fn test_missing_payload_reports_negative_limit() {
        let check = check_payload_length(None);
        assert!(!check.ok);
        assert_eq!(
            check.message,
            "Message exceeds 250 characters by -250, please reduce size."
        );
    }

    #[test]
    fn test_payload_counts_characters_not_bytes() {
        let payload = "é".repeat(250);
        assert!(check_payload_length(Some(&payload)).ok);
    }

    #[test]
    fn test_valid_recipient() {
        let check = check_recipient_format(Some("+27718693002"));
        assert!(check.ok);
        assert_eq!(check.message, "Cell phone number successfully captured.");
    }

    #[test]
    fn test_invalid_recipients() {
        for bad in [
            Some("0718693002"),
            Some(""),
            Some("   "),
            Some("+2771869300"),
            Some("+277186930021"),
            Some("+44718693002"),
            Some("+27 18693002"),
            Some("27718693002"),
            None,
        ] {
            let check = check_recipient_format(bad);
            assert!(!check.ok, "{bad:?} should fail");
            assert_eq!(check.message, BAD_NUMBER);
        }
    }

    #[test]
    fn test_custom_country_code() {
        let rules = Rules {
            country_code: "44".into(),
            ..Rules::default()
        };
        assert!(rules.validate_recipient_format(Some("+44718693002")).is_ok());
        assert!(rules.validate_recipient_format(Some("+27718693002")).is_err());
    }

    #[test]
    fn test_rules_deserialize_with_defaults() {
        let rules: Rules = serde_json::from_str(r#"{"max_payload_chars": 10}"#).unwrap();
        assert_eq!(rules.country_code, "27");
        assert_eq!(rules.max_payload_chars, 10);
        assert_eq!(
            rules.check_payload_length(Some("hello world")).message,
            "Message exceeds 10 characters by 1, please reduce size."
        );
    }
}
