//! # Username format rule
//!
//! Pluggable username-format validation for the arXiv identity platform.
//!
//! The rule accepts usernames of 1-255 characters drawn from ASCII
//! letters, digits, `.`, `_`, `#`, and `-`, and reports anything else as a
//! single `"Invalid username format"` error in the shared
//! [`ValidationContext`](arxiv_validate::ValidationContext). It plugs into
//! the host through [`UsernameFormatValidatorFactory`].
//!
//! ```
//! use arxiv_validate::prelude::*;
//! use arxiv_validate_username::UsernameFormatValidatorFactory;
//! use std::sync::Arc;
//!
//! let registry = ValidatorRegistry::new();
//! registry
//!     .register(Arc::new(UsernameFormatValidatorFactory::new()))
//!     .unwrap();
//!
//! let validator = registry
//!     .create("arxiv-username-validator-factory", &SessionContext::new())
//!     .unwrap();
//!
//! let mut context = ValidationContext::new();
//! validator.validate(
//!     Some(&serde_json::json!("alice_#99")),
//!     "username",
//!     &mut context,
//!     &ValidatorConfig::empty(),
//! );
//! assert!(context.is_valid());
//! ```

pub mod factory;
pub mod validator;

pub use factory::{UsernameFormatValidatorFactory, FACTORY_ID};
pub use validator::{UsernameFormatValidator, MESSAGE_INVALID_FORMAT, VALIDATOR_ID};
