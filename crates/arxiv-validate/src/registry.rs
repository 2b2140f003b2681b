//! Validator factory registry.
//!
//! Holds the factories the host has registered and drives their lifecycle:
//! `register` each factory, `init_all` with the host configuration,
//! `post_init_all` once registration is complete, `create` instances on
//! demand, and `close_all` at teardown.

use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::error::{SpiError, SpiResult};
use crate::provider::{ConfigScope, SessionContext, ValidatorFactory};
use crate::validator::Validator;

/// Registry of validator factories, keyed by factory id.
///
/// Registration order is preserved so lifecycle sweeps are deterministic.
#[derive(Default)]
pub struct ValidatorRegistry {
    factories: RwLock<Vec<Arc<dyn ValidatorFactory>>>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. Fails if its id is already taken.
    pub fn register(&self, factory: Arc<dyn ValidatorFactory>) -> SpiResult<()> {
        let mut factories = self.factories.write().expect("registry lock poisoned");
        if factories.iter().any(|f| f.id() == factory.id()) {
            return Err(SpiError::DuplicateFactory {
                id: factory.id().to_string(),
            });
        }
        debug!(id = %factory.id(), "validator factory registered");
        factories.push(factory);
        Ok(())
    }

    /// Initialize every factory with its own slice of the host config.
    ///
    /// Each factory sees `config` narrowed to its factory id, so providers
    /// cannot read each other's settings.
    pub fn init_all(&self, config: &ConfigScope) {
        for factory in self.snapshot() {
            factory.init(&config.scope(factory.id()));
            debug!(id = %factory.id(), "validator factory initialized");
        }
    }

    /// Run the post-registration pass, handing each factory the registry
    /// for cross-provider lookups.
    pub fn post_init_all(&self) {
        for factory in self.snapshot() {
            factory.post_init(self);
        }
    }

    /// Close every factory, in registration order.
    pub fn close_all(&self) {
        for factory in self.snapshot() {
            factory.close();
            debug!(id = %factory.id(), "validator factory closed");
        }
    }

    /// Look up a factory by id.
    #[must_use]
    pub fn factory(&self, id: &str) -> Option<Arc<dyn ValidatorFactory>> {
        self.factories
            .read()
            .expect("registry lock poisoned")
            .iter()
            .find(|f| f.id() == id)
            .cloned()
    }

    /// Ids of all registered factories, in registration order.
    #[must_use]
    pub fn factory_ids(&self) -> Vec<String> {
        self.factories
            .read()
            .expect("registry lock poisoned")
            .iter()
            .map(|f| f.id().to_string())
            .collect()
    }

    /// Create a validator via the factory registered under `factory_id`.
    pub fn create(
        &self,
        factory_id: &str,
        session: &SessionContext,
    ) -> SpiResult<Arc<dyn Validator>> {
        let factory = self
            .factory(factory_id)
            .ok_or_else(|| SpiError::FactoryNotFound {
                id: factory_id.to_string(),
            })?;
        Ok(factory.create(session))
    }

    // Snapshot outside the lock so lifecycle callbacks (post_init in
    // particular) can re-enter the registry.
    fn snapshot(&self) -> Vec<Arc<dyn ValidatorFactory>> {
        self.factories
            .read()
            .expect("registry lock poisoned")
            .clone()
    }
}
