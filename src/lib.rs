//! # Policy Engine - Attribute-Based Access Control
//!
//! `policy-engine` decides whether a principal may perform an action on a
//! resource, given a set of JSON policy documents and a bag of request
//! attributes.
//!
//! - **Deny-overrides**: one matching Deny statement beats any number of Allows
//! - **Default deny**: no policies, or nothing matching, means no access
//! - **Wildcards**: `*` in action and resource patterns matches any run of characters
//! - **Conditions**: String, Numeric, Date and Bool comparisons against request context
//! - **Validation**: structural checks with configurable limits, kept apart from evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use policy_engine::iam::{
//!     Condition, ConditionOperator, Effect, PolicyBuilder, PolicyEvaluator, Request, Statement,
//! };
//!
//! # fn main() -> policy_engine::Result<()> {
//! let policy = PolicyBuilder::new("p-1234", "DocumentAccess")
//!     .statement(Statement::new("s-1", Effect::Allow, ["read", "list"], ["resource:*"]))
//!     .statement(
//!         Statement::new("s-2", Effect::Allow, ["*"], ["resource:*"]).with_condition(
//!             Condition::new(ConditionOperator::StringEquals, "user.role", "admin"),
//!         ),
//!     )
//!     .build()?;
//!
//! let mut evaluator = PolicyEvaluator::new();
//! evaluator.add_policy(policy);
//!
//! let request = Request::new("user-123", "delete", "resource:doc1")
//!     .with_context("user.role", "standard");
//! assert!(!evaluator.evaluate(&request).allowed);
//!
//! let request = request.with_context("user.role", "admin");
//! assert!(evaluator.evaluate(&request).allowed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading policies
//!
//! ```rust
//! use policy_engine::iam::{evaluate, Policy, Request};
//! use policy_engine::validation::PolicyValidator;
//!
//! # fn main() -> policy_engine::Result<()> {
//! let policy = Policy::from_json(r#"{
//!     "version": "2023-01-01",
//!     "id": "p-1",
//!     "name": "ReadOnly",
//!     "created_at": "2023-05-01T10:00:00Z",
//!     "statements": [
//!         {"id": "s-1", "effect": "Allow", "actions": ["read"], "resources": ["*"]}
//!     ]
//! }"#)?;
//!
//! assert!(PolicyValidator::default().validate(&policy).is_empty());
//! assert!(evaluate(&Request::new("u", "read", "anything"), &[policy]).allowed);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod iam;
pub mod validation;

pub use config::EngineConfig;
pub use error::{PolicyError, Result};
pub use iam::{
    evaluate, AttributeValue, Condition, ConditionOperator, Context, Decision, Effect, Policy,
    PolicyBuilder, PolicyEvaluator, Request, SharedPolicyEvaluator, Statement,
};
pub use validation::{PolicyValidator, ValidationError};
