//! # Validation SPI
//!
//! Core abstractions for pluggable input-validation rules.
//!
//! A validation rule is a stateless [`Validator`] that inspects one
//! candidate value per call and reports failures into a shared,
//! request-scoped [`ValidationContext`]. Rules reach the host through a
//! [`ValidatorFactory`], which the host registers in a
//! [`ValidatorRegistry`] and drives through a fixed lifecycle
//! (`init` / `post_init` / `create` / `close`).
//!
//! ## Example
//!
//! ```ignore
//! use arxiv_validate::prelude::*;
//!
//! // Register factories once at startup
//! let registry = ValidatorRegistry::new();
//! registry.register(username_factory)?;
//! registry.init_all(&host_config);
//! registry.post_init_all();
//!
//! // Per request: create (or reuse) a validator and run it
//! let validator = registry.create("arxiv-username-validator-factory", &session)?;
//! let mut context = ValidationContext::new();
//! validator.validate(Some(&value), "username", &mut context, &ValidatorConfig::empty());
//!
//! if !context.is_valid() {
//!     // surface context.errors() to the user
//! }
//! ```
//!
//! ## Crate organization
//!
//! - [`context`] - `ValidationContext` and `ValidationError`
//! - [`validator`] - The `Validator` trait and per-call `ValidatorConfig`
//! - [`provider`] - Factory lifecycle, `ConfigScope`, `ConfigProperty`
//! - [`registry`] - Factory registration and lifecycle orchestration
//! - [`error`] - SPI error types

pub mod context;
pub mod error;
pub mod provider;
pub mod registry;
pub mod validator;

/// Prelude module for convenient imports.
///
/// ```
/// use arxiv_validate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::context::{ValidationContext, ValidationError};
    pub use crate::error::{SpiError, SpiResult};
    pub use crate::provider::{
        ConfigProperty, ConfigPropertyKind, ConfigScope, SessionContext, ValidatorFactory,
    };
    pub use crate::registry::ValidatorRegistry;
    pub use crate::validator::{Validator, ValidatorConfig};
}

pub use context::{ValidationContext, ValidationError};
pub use error::{SpiError, SpiResult};
pub use provider::{ConfigProperty, ConfigScope, SessionContext, ValidatorFactory};
pub use registry::ValidatorRegistry;
pub use validator::{Validator, ValidatorConfig};
