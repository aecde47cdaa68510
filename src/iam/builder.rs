//! Fluent policy construction with validation on `build()`

use super::policy::{Policy, Statement, POLICY_VERSION};
use crate::config::EngineConfig;
use crate::error::{PolicyError, Result};
use crate::validation::PolicyValidator;
use chrono::{DateTime, Utc};

/// Builder for [`Policy`] values
///
/// # Examples
///
/// ```
/// use policy_engine::iam::{Effect, PolicyBuilder, Statement};
///
/// let policy = PolicyBuilder::new("p-1234", "ReadOnlyAccess")
///     .description("Read everything, write nothing")
///     .statement(Statement::new("s-1", Effect::Allow, ["read", "list"], ["resource:*"]))
///     .statement(Statement::new("s-2", Effect::Deny, ["write", "delete"], ["resource:*"]))
///     .build()
///     .unwrap();
///
/// assert_eq!(policy.statements.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    id: String,
    name: String,
    version: String,
    description: String,
    statements: Vec<Statement>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    validator: PolicyValidator,
}

impl PolicyBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        PolicyBuilder {
            id: id.into(),
            name: name.into(),
            version: POLICY_VERSION.to_string(),
            description: String::new(),
            statements: Vec::new(),
            created_at: None,
            updated_at: None,
            validator: PolicyValidator::default(),
        }
    }

    /// Take the version and validation limits from an engine config
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.version = config.policy_version.clone();
        self.validator = PolicyValidator::from_config(config);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.statements.extend(statements);
        self
    }

    /// Defaults to the time of `build()`
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Assemble the policy and run structural validation
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::Validation` with every problem found.
    pub fn build(self) -> Result<Policy> {
        let policy = Policy {
            version: self.version,
            id: self.id,
            name: self.name,
            description: self.description,
            statements: self.statements,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            updated_at: self.updated_at,
        };

        let errors = self.validator.validate(&policy);
        if !errors.is_empty() {
            return Err(PolicyError::Validation(errors));
        }

        Ok(policy)
    }
}
