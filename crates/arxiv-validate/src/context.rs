//! Validation context and error records.
//!
//! A [`ValidationContext`] is created by the host once per validation
//! request and threaded through every validator that inspects the same
//! input. Validators only ever append to it; they never read back, clear,
//! or reorder prior errors, so errors come out in call order.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A single validation failure reported by a validator.
///
/// The `message` is a stable message key, not display text; the host maps
/// it to localized copy using `validator_id` for the lookup namespace.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Id of the validator that reported this error.
    pub validator_id: String,
    /// The input field the error applies to (the `input_hint` of the call).
    pub field: String,
    /// Message key for localization lookup.
    pub message: String,
    /// Optional message parameters for localization interpolation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Value>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(
        validator_id: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            validator_id: validator_id.into(),
            field: field.into(),
            message: message.into(),
            parameters: Vec::new(),
        }
    }

    /// Attach localization parameters to this error.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<Value>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Request-scoped, append-only accumulator of validation errors.
///
/// Owned by the host and passed by `&mut` into each validator for the
/// duration of one call. The attribute map lets validators running in the
/// same request share ancillary state without coupling to each other.
#[derive(Debug, Default)]
pub struct ValidationContext {
    errors: Vec<ValidationError>,
    attributes: HashMap<String, Value>,
}

impl ValidationContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error. Prior errors are never touched.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// All errors reported so far, in call order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether no validator has reported an error yet.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the context, yielding the accumulated errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Set a request-scoped attribute, visible to later validators.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    /// Read a request-scoped attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_context_is_valid() {
        let ctx = ValidationContext::new();
        assert!(ctx.is_valid());
        assert!(ctx.errors().is_empty());
    }

    #[test]
    fn test_errors_preserve_call_order() {
        let mut ctx = ValidationContext::new();
        ctx.add_error(ValidationError::new("rule-a", "username", "first"));
        ctx.add_error(ValidationError::new("rule-b", "email", "second"));

        assert!(!ctx.is_valid());
        let errors = ctx.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "first");
        assert_eq!(errors[1].message, "second");
        assert_eq!(errors[1].validator_id, "rule-b");
    }

    #[test]
    fn test_into_errors() {
        let mut ctx = ValidationContext::new();
        ctx.add_error(ValidationError::new("rule", "field", "msg"));
        let errors = ctx.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "field");
    }

    #[test]
    fn test_attributes() {
        let mut ctx = ValidationContext::new();
        assert!(ctx.attribute("seen").is_none());
        ctx.set_attribute("seen", json!(true));
        assert_eq!(ctx.attribute("seen"), Some(&json!(true)));
    }

    #[test]
    fn test_error_serialization_skips_empty_parameters() {
        let err = ValidationError::new("rule", "username", "Invalid username format");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"validator_id\":\"rule\""));
        assert!(json.contains("\"field\":\"username\""));
        assert!(!json.contains("parameters"));
    }

    #[test]
    fn test_error_serialization_with_parameters() {
        let err = ValidationError::new("rule", "username", "too_long")
            .with_parameters(vec![json!(255)]);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"parameters\":[255]"));
    }
}
