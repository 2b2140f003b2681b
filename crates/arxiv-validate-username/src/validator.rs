//! Username format validation.
//!
//! Enforces the account-name policy for registration and profile updates:
//! - Allowed characters: ASCII letters, digits, period, underscore, hash,
//!   hyphen
//! - Length: 1-255 characters
//! - No trimming; whitespace anywhere fails the character class
//!
//! All failure causes (absent value, bad character, out-of-bounds length)
//! report the same message key, `"Invalid username format"`; the host does
//! not localize them separately.

use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

use arxiv_validate::context::{ValidationContext, ValidationError};
use arxiv_validate::validator::{Validator, ValidatorConfig};

/// Id stamped on every error this rule reports; also the host's
/// localization-key namespace for it.
pub const VALIDATOR_ID: &str = "arxiv-username-validator";

/// Message key reported for every rejected username.
pub const MESSAGE_INVALID_FORMAT: &str = "Invalid username format";

/// Username pattern: 1-255 characters from the allowed class, anchored at
/// both ends so the whole input must match.
static USERNAME_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._#-]{1,255}$")
        .expect("USERNAME_PATTERN is a valid regex pattern")
});

/// Stateless username-format rule.
///
/// Carries no per-request state and only immutable compiled pattern data,
/// so one instance is safe to share across arbitrarily many concurrent
/// validation calls.
#[derive(Debug, Default)]
pub struct UsernameFormatValidator;

impl UsernameFormatValidator {
    /// Create a new validator instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check a candidate against the format policy without touching a
    /// context.
    #[must_use]
    pub fn matches(username: &str) -> bool {
        USERNAME_PATTERN.is_match(username)
    }
}

/// String form of a candidate value. `Null` reads as absent; non-string
/// values are checked against their compact JSON rendering.
fn coerce(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        other => Some(Cow::Owned(other.to_string())),
    }
}

impl Validator for UsernameFormatValidator {
    fn id(&self) -> &str {
        VALIDATOR_ID
    }

    fn validate(
        &self,
        value: Option<&Value>,
        input_hint: &str,
        context: &mut ValidationContext,
        _config: &ValidatorConfig,
    ) {
        let username = value.and_then(coerce);
        let valid = username.as_deref().is_some_and(Self::matches);
        if !valid {
            context.add_error(ValidationError::new(
                VALIDATOR_ID,
                input_hint,
                MESSAGE_INVALID_FORMAT,
            ));
        }
    }
}
