//! Engine configuration
//!
//! Loaded from TOML; every field is optional and falls back to its default.
//!
//! ```toml
//! policy_version = "2023-01-01"
//! require_policy_id = true
//! require_policy_name = true
//! max_statements = 100
//! max_actions_per_statement = 50
//! max_resources_per_statement = 100
//! max_conditions_per_statement = 20
//! ```
//!
//! A limit of `0` disables that check.

use crate::error::Result;
use crate::iam::POLICY_VERSION;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EngineConfig {
    /// Version stamped on policies assembled by `PolicyBuilder`
    #[validate(length(min = 1, message = "policy_version cannot be empty"))]
    pub policy_version: String,

    pub require_policy_id: bool,

    pub require_policy_name: bool,

    #[validate(range(max = 10_000, message = "max_statements must be at most 10000"))]
    pub max_statements: usize,

    #[validate(range(max = 1_000, message = "max_actions_per_statement must be at most 1000"))]
    pub max_actions_per_statement: usize,

    #[validate(range(max = 1_000, message = "max_resources_per_statement must be at most 1000"))]
    pub max_resources_per_statement: usize,

    #[validate(range(max = 100, message = "max_conditions_per_statement must be at most 100"))]
    pub max_conditions_per_statement: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            policy_version: POLICY_VERSION.to_string(),
            require_policy_id: true,
            require_policy_name: true,
            max_statements: 100,
            max_actions_per_statement: 50,
            max_resources_per_statement: 100,
            max_conditions_per_statement: 20,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        config.warn_on_disabled_limits();
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate and render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        self.validate()?;
        Ok(toml::to_string_pretty(self)?)
    }

    fn warn_on_disabled_limits(&self) {
        let limits = [
            ("max_statements", self.max_statements),
            ("max_actions_per_statement", self.max_actions_per_statement),
            ("max_resources_per_statement", self.max_resources_per_statement),
            ("max_conditions_per_statement", self.max_conditions_per_statement),
        ];

        for (name, value) in limits {
            if value == 0 {
                warn!(limit = name, "policy validation limit disabled");
            }
        }
    }
}
