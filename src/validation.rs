//! Structural validation for policy documents
//!
//! The evaluator never calls this; it tolerates malformed statements by never
//! matching them. Callers validate before handing policies to an evaluator
//! (or use `PolicyBuilder`, which validates on `build()`).
//!
//! Every problem is reported, not just the first, as a `field`/`message` pair
//! where `field` is the JSON path, e.g. `statements[0].conditions[1].key`.

use crate::config::EngineConfig;
use crate::iam::{Condition, ConditionOperator, Policy, Statement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single structural problem in a policy document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Policy validator with configurable limits (`0` disables a limit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyValidator {
    pub require_id: bool,
    pub require_name: bool,
    pub max_statements: usize,
    pub max_actions_per_statement: usize,
    pub max_resources_per_statement: usize,
    pub max_conditions_per_statement: usize,
}

impl Default for PolicyValidator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl PolicyValidator {
    /// Validator with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        PolicyValidator {
            require_id: config.require_policy_id,
            require_name: config.require_policy_name,
            max_statements: config.max_statements,
            max_actions_per_statement: config.max_actions_per_statement,
            max_resources_per_statement: config.max_resources_per_statement,
            max_conditions_per_statement: config.max_conditions_per_statement,
        }
    }

    /// Validate a whole policy; an empty result means well-formed
    pub fn validate(&self, policy: &Policy) -> Vec<ValidationError> {
        let mut errors = self.validate_fields(policy);

        for (index, statement) in policy.statements.iter().enumerate() {
            errors.extend(self.validate_statement(statement, index));
        }

        errors
    }

    /// Policy-level fields only
    pub fn validate_fields(&self, policy: &Policy) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.require_id && policy.id.is_empty() {
            errors.push(ValidationError::new("id", "Policy ID is required"));
        }

        if self.require_name && policy.name.is_empty() {
            errors.push(ValidationError::new("name", "Policy name is required"));
        }

        if policy.version.is_empty() {
            errors.push(ValidationError::new("version", "Policy version is required"));
        }

        if policy.statements.is_empty() {
            errors.push(ValidationError::new(
                "statements",
                "Policy must have at least one statement",
            ));
        }

        if exceeds(policy.statements.len(), self.max_statements) {
            errors.push(ValidationError::new(
                "statements",
                format!(
                    "Policy exceeds maximum number of statements ({})",
                    self.max_statements
                ),
            ));
        }

        errors
    }

    /// One statement and its conditions
    pub fn validate_statement(&self, statement: &Statement, index: usize) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let prefix = format!("statements[{}]", index);

        if statement.actions.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.actions"),
                "Statement must have at least one action",
            ));
        }

        if exceeds(statement.actions.len(), self.max_actions_per_statement) {
            errors.push(ValidationError::new(
                format!("{prefix}.actions"),
                format!(
                    "Statement exceeds maximum number of actions ({})",
                    self.max_actions_per_statement
                ),
            ));
        }

        if statement.resources.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.resources"),
                "Statement must have at least one resource",
            ));
        }

        if exceeds(statement.resources.len(), self.max_resources_per_statement) {
            errors.push(ValidationError::new(
                format!("{prefix}.resources"),
                format!(
                    "Statement exceeds maximum number of resources ({})",
                    self.max_resources_per_statement
                ),
            ));
        }

        if exceeds(statement.conditions.len(), self.max_conditions_per_statement) {
            errors.push(ValidationError::new(
                format!("{prefix}.conditions"),
                format!(
                    "Statement exceeds maximum number of conditions ({})",
                    self.max_conditions_per_statement
                ),
            ));
        }

        for (cond_index, condition) in statement.conditions.iter().enumerate() {
            errors.extend(self.validate_condition(condition, index, cond_index));
        }

        errors
    }

    pub fn validate_condition(
        &self,
        condition: &Condition,
        stmt_index: usize,
        cond_index: usize,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let prefix = format!("statements[{stmt_index}].conditions[{cond_index}]");

        match &condition.operator {
            ConditionOperator::Unsupported(name) if name.is_empty() => {
                errors.push(ValidationError::new(
                    format!("{prefix}.operator"),
                    "Condition operator is required",
                ));
            }
            ConditionOperator::Unsupported(name) => {
                errors.push(ValidationError::new(
                    format!("{prefix}.operator"),
                    format!("Unsupported condition operator '{name}'"),
                ));
            }
            _ => {}
        }

        if condition.key.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.key"),
                "Condition key is required",
            ));
        }

        if condition.value.is_null() {
            errors.push(ValidationError::new(
                format!("{prefix}.value"),
                "Condition value cannot be null",
            ));
        }

        errors
    }
}

fn exceeds(count: usize, limit: usize) -> bool {
    limit > 0 && count > limit
}
