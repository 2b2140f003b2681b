//! Provider factory for the username-format rule.

use std::sync::Arc;

use arxiv_validate::provider::{ConfigProperty, ConfigScope, SessionContext, ValidatorFactory};
use arxiv_validate::registry::ValidatorRegistry;
use arxiv_validate::validator::Validator;

use crate::validator::UsernameFormatValidator;

/// Id this factory registers under, distinct from the validator's own id
/// so the host can tell "which factory produced this validator" apart from
/// "which rule reported this error".
pub const FACTORY_ID: &str = "arxiv-username-validator-factory";

/// Factory for [`UsernameFormatValidator`].
///
/// The rule is stateless, so the factory holds one shared instance and
/// hands it out from every `create` call. The policy is hard-coded; no
/// lifecycle hook consumes configuration and no admin-configurable
/// properties are declared.
pub struct UsernameFormatValidatorFactory {
    validator: Arc<UsernameFormatValidator>,
}

impl UsernameFormatValidatorFactory {
    /// Create the factory and its shared validator instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validator: Arc::new(UsernameFormatValidator::new()),
        }
    }
}

impl Default for UsernameFormatValidatorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorFactory for UsernameFormatValidatorFactory {
    fn create(&self, _session: &SessionContext) -> Arc<dyn Validator> {
        self.validator.clone()
    }

    fn init(&self, _config: &ConfigScope) {
        // The format policy is fixed; any configuration scope is inert.
    }

    fn post_init(&self, _registry: &ValidatorRegistry) {}

    fn close(&self) {}

    fn id(&self) -> &str {
        FACTORY_ID
    }

    fn config_metadata(&self) -> Vec<ConfigProperty> {
        Vec::new()
    }
}
