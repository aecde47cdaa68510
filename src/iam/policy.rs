//! IAM policy document structure
//!
//! Policies define which actions are allowed or denied on which resources,
//! optionally narrowed by conditions on the request context. The JSON layout
//! uses snake_case field names and exact symbolic names for `Effect` and
//! condition operators.

use super::condition::Condition;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Default version stamped on newly constructed policies
pub const POLICY_VERSION: &str = "2023-01-01";

/// Effect of a policy statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Allow the action
    Allow,
    /// Deny the action (takes precedence over Allow)
    Deny,
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Allow => f.write_str("Allow"),
            Effect::Deny => f.write_str("Deny"),
        }
    }
}

/// A single policy statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement ID, reported in decisions
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Effect of this statement
    pub effect: Effect,

    /// Action patterns this statement applies to (supports `*`)
    #[serde(default)]
    pub actions: Vec<String>,

    /// Resource patterns this statement applies to (supports `*`)
    #[serde(default)]
    pub resources: Vec<String>,

    /// Conditions that must all hold for this statement to apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Statement {
    /// Create a new statement without conditions
    pub fn new<A, R>(id: impl Into<String>, effect: Effect, actions: A, resources: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Statement {
            id: id.into(),
            effect,
            actions: actions.into_iter().map(Into::into).collect(),
            resources: resources.into_iter().map(Into::into).collect(),
            conditions: Vec::new(),
        }
    }

    /// Append a condition
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// Complete IAM policy document
///
/// Only `created_at` is required on decode. Missing identity fields and
/// statements decode as empty and are left for `PolicyValidator` to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Policy format version
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Statements, evaluated in order
    #[serde(default)]
    pub statements: Vec<Statement>,

    pub created_at: DateTime<Utc>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Policy {
    /// Create a policy stamped with the default version and the current time
    pub fn new(id: impl Into<String>, name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Policy {
            version: POLICY_VERSION.to_string(),
            id: id.into(),
            name: name.into(),
            description: String::new(),
            statements,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Add a statement to this policy
    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Parse policy from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize policy to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize policy to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Wrapper document: `{"policies": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyList {
    pub policies: Vec<Policy>,
}

/// Parse a bare JSON array of policies
pub fn from_json_array(json: &str) -> Result<Vec<Policy>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a `{"policies": [...]}` document
pub fn from_json_list(json: &str) -> Result<Vec<Policy>> {
    let list: PolicyList = serde_json::from_str(json)?;
    Ok(list.policies)
}

/// Serialize policies as a compact `{"policies": [...]}` document
pub fn to_json_list(policies: &[Policy]) -> Result<String> {
    Ok(serde_json::to_string(&PolicyListRef { policies })?)
}

/// Serialize policies as an indented `{"policies": [...]}` document
pub fn to_json_list_pretty(policies: &[Policy]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PolicyListRef { policies })?)
}

#[derive(Serialize)]
struct PolicyListRef<'a> {
    policies: &'a [Policy],
}

/// `updated_at` may be missing, `null`, or an empty string
fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|ts| Some(ts.with_timezone(&Utc)))
            .map_err(|_| serde::de::Error::custom("invalid updated_at format, must be RFC3339")),
    }
}
