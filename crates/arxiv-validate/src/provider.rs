//! Provider lifecycle contract.
//!
//! A [`ValidatorFactory`] is the host-facing object for one validation
//! rule: the host registers it, drives `init` / `post_init` / `close`
//! around it, and calls `create` to obtain the [`Validator`] instance it
//! invokes per request. Factories for stateless rules typically hand out
//! one shared instance.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::registry::ValidatorRegistry;
use crate::validator::Validator;

/// Read-only view of host global configuration, keyed by dotted paths.
///
/// Passed to [`ValidatorFactory::init`] at registration. A scope that is
/// empty or carries unexpected keys is inert; nothing here can fail.
#[derive(Debug, Clone, Default)]
pub struct ConfigScope {
    prefix: String,
    values: HashMap<String, String>,
}

impl ConfigScope {
    /// An empty scope.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a scope from flat key/value pairs.
    #[must_use]
    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: String::new(),
            values,
        }
    }

    /// Narrow this scope to keys under `prefix.`.
    #[must_use]
    pub fn scope(&self, prefix: &str) -> Self {
        let prefix = if self.prefix.is_empty() {
            prefix.to_string()
        } else {
            format!("{}.{prefix}", self.prefix)
        };
        Self {
            prefix,
            values: self.values.clone(),
        }
    }

    /// Look up a string value in this scope.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let full_key = if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.prefix)
        };
        self.values.get(&full_key).map(String::as_str)
    }

    /// Look up a boolean value; unparseable values read as absent.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// Look up an integer value; unparseable values read as absent.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.parse().ok())
    }
}

/// Opaque per-request session handle passed to [`ValidatorFactory::create`].
///
/// Carries host-side request identity (e.g. the realm being served). The
/// framework never inspects it on behalf of validators.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    realm: Option<String>,
}

impl SessionContext {
    /// A session with no realm association.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session scoped to a named realm.
    #[must_use]
    pub fn for_realm(realm: impl Into<String>) -> Self {
        Self {
            realm: Some(realm.into()),
        }
    }

    /// The realm this session is scoped to, if any.
    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }
}

/// Data type of an admin-configurable provider property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPropertyKind {
    String,
    Boolean,
    Integer,
    List,
}

/// Schema entry for one admin-configurable property of a provider.
///
/// Returned from [`ValidatorFactory::config_metadata`] so the host admin
/// console can render a settings form without knowing the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigProperty {
    /// Configuration key.
    pub name: String,
    /// Display label for the admin console.
    pub label: String,
    /// Help text shown alongside the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Data type of the property.
    pub kind: ConfigPropertyKind,
    /// Default value applied when the administrator sets nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Allowed values for `List` properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Whether the value must be masked in the admin console.
    #[serde(default)]
    pub secret: bool,
}

impl ConfigProperty {
    /// Create a property with the given key, label, and type.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: ConfigPropertyKind,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            help_text: None,
            kind,
            default_value: None,
            options: Vec::new(),
            secret: false,
        }
    }

    /// Set the help text.
    #[must_use]
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Set the default value.
    #[must_use]
    pub fn with_default(mut self, default_value: Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// Set the allowed values for a `List` property.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Mark the property as secret.
    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Lifecycle contract for a pluggable validator provider.
///
/// The host drives the lifecycle in a fixed order: `register` the factory,
/// `init` it with its configuration scope, `post_init` once every factory
/// in the deployment is registered, then `create` instances on demand, and
/// `close` at teardown. Lifecycle methods must not fail under normal
/// operation; a factory whose policy ignores configuration treats a
/// malformed scope as inert.
pub trait ValidatorFactory: Send + Sync {
    /// Produce the validator this factory manages.
    ///
    /// Stateless validators may hand out one shared instance; the host
    /// treats the returned value as safe for concurrent use either way.
    fn create(&self, session: &SessionContext) -> Arc<dyn Validator>;

    /// One-time initialization with this factory's configuration scope.
    fn init(&self, _config: &ConfigScope) {}

    /// Called once after all factories are registered, for cross-provider
    /// wiring.
    fn post_init(&self, _registry: &ValidatorRegistry) {}

    /// Release resources at provider teardown.
    fn close(&self) {}

    /// Fixed factory id, distinct from the validator's own id.
    fn id(&self) -> &str;

    /// Schema of admin-configurable properties; empty when the policy is
    /// hard-coded.
    fn config_metadata(&self) -> Vec<ConfigProperty> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_scope_lookup() {
        let mut values = HashMap::new();
        values.insert("spi.username.enabled".to_string(), "true".to_string());
        values.insert("spi.username.max".to_string(), "255".to_string());
        values.insert("spi.username.mode".to_string(), "strict".to_string());
        let scope = ConfigScope::from_values(values).scope("spi").scope("username");

        assert_eq!(scope.get("mode"), Some("strict"));
        assert_eq!(scope.get_bool("enabled"), Some(true));
        assert_eq!(scope.get_int("max"), Some(255));
        assert!(scope.get("missing").is_none());
    }

    #[test]
    fn test_config_scope_unparseable_values_read_as_absent() {
        let mut values = HashMap::new();
        values.insert("flag".to_string(), "not-a-bool".to_string());
        let scope = ConfigScope::from_values(values);

        assert_eq!(scope.get("flag"), Some("not-a-bool"));
        assert!(scope.get_bool("flag").is_none());
        assert!(scope.get_int("flag").is_none());
    }

    #[test]
    fn test_session_context_realm() {
        assert!(SessionContext::new().realm().is_none());
        assert_eq!(SessionContext::for_realm("arxiv").realm(), Some("arxiv"));
    }

    #[test]
    fn test_config_property_builder() {
        let prop = ConfigProperty::new("max-length", "Maximum length", ConfigPropertyKind::Integer)
            .with_help_text("Longest accepted value")
            .with_default(json!(255));

        assert_eq!(prop.name, "max-length");
        assert_eq!(prop.kind, ConfigPropertyKind::Integer);
        assert_eq!(prop.default_value, Some(json!(255)));
        assert!(!prop.secret);
    }

    #[test]
    fn test_config_property_serialization() {
        let prop = ConfigProperty::new("mode", "Mode", ConfigPropertyKind::List)
            .with_options(vec!["strict".to_string(), "lenient".to_string()]);
        let json = serde_json::to_string(&prop).unwrap();

        assert!(json.contains("\"kind\":\"list\""));
        assert!(json.contains("\"options\":[\"strict\",\"lenient\"]"));
        // unset optional fields are omitted
        assert!(!json.contains("help_text"));
        assert!(!json.contains("default_value"));
    }
}
