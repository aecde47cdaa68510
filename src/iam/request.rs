//! Access requests and the decisions made about them

use super::value::{AttributeValue, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An access request: who wants to do what, to which resource, in which context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Opaque caller identity (not authenticated here)
    pub principal: String,
    pub action: String,
    pub resource: String,
    /// Attributes consulted by statement conditions
    #[serde(default)]
    pub context: Context,
}

impl Request {
    pub fn new(
        principal: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Request {
            principal: principal.into(),
            action: action.into(),
            resource: resource.into(),
            context: Context::new(),
        }
    }

    /// Add (or replace) a context attribute
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Outcome of evaluating a request against a policy set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    /// Human-readable justification
    pub reason: String,
    pub evaluated_at: DateTime<Utc>,
    /// IDs of the statements that matched, in evaluation order
    pub matched_rules: Vec<String>,
}

impl Decision {
    /// A fresh default-deny decision
    pub(crate) fn deny(reason: impl Into<String>) -> Self {
        Decision {
            allowed: false,
            reason: reason.into(),
            evaluated_at: Utc::now(),
            matched_rules: Vec::new(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}
