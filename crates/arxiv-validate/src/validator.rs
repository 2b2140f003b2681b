//! Validator trait and per-call configuration.

use serde_json::Value;
use std::collections::HashMap;

use crate::context::ValidationContext;

/// Opaque per-validator configuration bag.
///
/// The host resolves one of these from its stored per-realm settings and
/// passes it on every `validate` call. Validators with hard-coded policy
/// ignore it entirely.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    options: HashMap<String, Value>,
}

impl ValidatorConfig {
    /// An empty configuration.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a configuration from explicit options.
    #[must_use]
    pub fn from_options(options: HashMap<String, Value>) -> Self {
        Self { options }
    }

    /// Look up a configured option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Whether an option is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }
}

/// A stateless validation rule.
///
/// Implementations inspect one candidate value per call and report failures
/// by appending to the shared [`ValidationContext`]. A `validate` call never
/// fails: malformed or absent input is a validation outcome, not a fault.
///
/// Implementations must be safe to share across concurrent requests; any
/// compiled state (patterns, tables) must be immutable after construction.
pub trait Validator: Send + Sync {
    /// The fixed id this rule stamps on every error it reports.
    fn id(&self) -> &str;

    /// Validate one candidate value.
    ///
    /// # Arguments
    /// * `value` - The candidate, or `None` when the input is absent.
    ///   `Value::Null` is treated the same as `None`.
    /// * `input_hint` - Label of the form field that produced the value;
    ///   passed through into any reported error, never inspected.
    /// * `context` - The shared accumulator; this call appends zero or one
    ///   error and leaves everything else untouched.
    /// * `config` - Per-validator options resolved by the host; may be
    ///   empty or ignored.
    fn validate(
        &self,
        value: Option<&Value>,
        input_hint: &str,
        context: &mut ValidationContext,
        config: &ValidatorConfig,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_lookup() {
        let mut options = HashMap::new();
        options.insert("max-length".to_string(), json!(64));
        let config = ValidatorConfig::from_options(options);

        assert!(config.contains("max-length"));
        assert_eq!(config.get("max-length"), Some(&json!(64)));
        assert!(config.get("min-length").is_none());
    }

    #[test]
    fn test_empty_config() {
        let config = ValidatorConfig::empty();
        assert!(!config.contains("anything"));
    }
}
