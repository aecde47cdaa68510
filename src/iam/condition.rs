//! Condition evaluation for IAM policies
//!
//! Conditions narrow when a statement applies, based on request context:
//! - String operations (Equals, NotEquals, Like, NotLike)
//! - Numeric operations (Equals, NotEquals, LessThan[Equals], GreaterThan[Equals])
//! - Date operations (same six comparisons as numeric)
//! - Boolean equality (`Bool`)
//!
//! A missing context key, an unknown operator or an operand that cannot be
//! coerced all leave the condition unsatisfied. The IgnoreCase names are
//! recognised in documents but have no comparison behind them, so they are
//! never satisfied either.

use super::comparator::{
    BoolComparator, DateComparator, NumericComparator, OrderedComparator, StringComparator,
};
use super::value::{AttributeValue, Context};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Value domain an operator compares in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    String,
    Numeric,
    Date,
    Bool,
}

/// Condition operator
///
/// Serialized as its exact symbolic name (e.g. `"NumericLessThan"`). Names the
/// engine does not know decode to `Unsupported` and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionOperator {
    /// String equals (case-sensitive)
    StringEquals,
    StringNotEquals,
    /// Recognised name only; never satisfied
    StringEqualsIgnoreCase,
    /// Recognised name only; never satisfied
    StringNotEqualsIgnoreCase,
    /// String matches pattern (supports * wildcard)
    StringLike,
    StringNotLike,

    NumericEquals,
    NumericNotEquals,
    NumericLessThan,
    NumericLessThanEquals,
    NumericGreaterThan,
    NumericGreaterThanEquals,

    /// Date equals (RFC 3339, `YYYY-MM-DD`, or `YYYY-MM-DD[T ]HH:MM:SS`)
    DateEquals,
    DateNotEquals,
    DateLessThan,
    DateLessThanEquals,
    DateGreaterThan,
    DateGreaterThanEquals,

    /// Boolean equals
    Bool,

    /// Anything else; never satisfied
    Unsupported(String),
}

impl ConditionOperator {
    /// Every operator name the engine recognises
    pub const KNOWN: [ConditionOperator; 19] = [
        ConditionOperator::StringEquals,
        ConditionOperator::StringNotEquals,
        ConditionOperator::StringEqualsIgnoreCase,
        ConditionOperator::StringNotEqualsIgnoreCase,
        ConditionOperator::StringLike,
        ConditionOperator::StringNotLike,
        ConditionOperator::NumericEquals,
        ConditionOperator::NumericNotEquals,
        ConditionOperator::NumericLessThan,
        ConditionOperator::NumericLessThanEquals,
        ConditionOperator::NumericGreaterThan,
        ConditionOperator::NumericGreaterThanEquals,
        ConditionOperator::DateEquals,
        ConditionOperator::DateNotEquals,
        ConditionOperator::DateLessThan,
        ConditionOperator::DateLessThanEquals,
        ConditionOperator::DateGreaterThan,
        ConditionOperator::DateGreaterThanEquals,
        ConditionOperator::Bool,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ConditionOperator::StringEquals => "StringEquals",
            ConditionOperator::StringNotEquals => "StringNotEquals",
            ConditionOperator::StringEqualsIgnoreCase => "StringEqualsIgnoreCase",
            ConditionOperator::StringNotEqualsIgnoreCase => "StringNotEqualsIgnoreCase",
            ConditionOperator::StringLike => "StringLike",
            ConditionOperator::StringNotLike => "StringNotLike",
            ConditionOperator::NumericEquals => "NumericEquals",
            ConditionOperator::NumericNotEquals => "NumericNotEquals",
            ConditionOperator::NumericLessThan => "NumericLessThan",
            ConditionOperator::NumericLessThanEquals => "NumericLessThanEquals",
            ConditionOperator::NumericGreaterThan => "NumericGreaterThan",
            ConditionOperator::NumericGreaterThanEquals => "NumericGreaterThanEquals",
            ConditionOperator::DateEquals => "DateEquals",
            ConditionOperator::DateNotEquals => "DateNotEquals",
            ConditionOperator::DateLessThan => "DateLessThan",
            ConditionOperator::DateLessThanEquals => "DateLessThanEquals",
            ConditionOperator::DateGreaterThan => "DateGreaterThan",
            ConditionOperator::DateGreaterThanEquals => "DateGreaterThanEquals",
            ConditionOperator::Bool => "Bool",
            ConditionOperator::Unsupported(name) => name,
        }
    }

    /// The domain this operator compares in, `None` if it is never evaluated
    pub fn domain(&self) -> Option<ValueDomain> {
        use ConditionOperator::*;

        match self {
            StringEquals | StringNotEquals | StringLike | StringNotLike => Some(ValueDomain::String),
            NumericEquals | NumericNotEquals | NumericLessThan | NumericLessThanEquals
            | NumericGreaterThan | NumericGreaterThanEquals => Some(ValueDomain::Numeric),
            DateEquals | DateNotEquals | DateLessThan | DateLessThanEquals | DateGreaterThan
            | DateGreaterThanEquals => Some(ValueDomain::Date),
            Bool => Some(ValueDomain::Bool),
            StringEqualsIgnoreCase | StringNotEqualsIgnoreCase | Unsupported(_) => None,
        }
    }

    /// Whether conditions using this operator can ever be satisfied
    pub fn is_supported(&self) -> bool {
        self.domain().is_some()
    }

    /// Compare a context value (`actual`) against a condition value (`expected`)
    pub fn compare(&self, actual: &AttributeValue, expected: &AttributeValue) -> bool {
        use ConditionOperator::*;

        match self {
            StringEquals => StringComparator::equals(actual, expected),
            StringNotEquals => StringComparator::not_equals(actual, expected),
            StringLike => StringComparator::like(actual, expected),
            StringNotLike => StringComparator::not_like(actual, expected),

            NumericEquals => NumericComparator::equals(actual, expected),
            NumericNotEquals => NumericComparator::not_equals(actual, expected),
            NumericLessThan => NumericComparator::less_than(actual, expected),
            NumericLessThanEquals => NumericComparator::less_than_equals(actual, expected),
            NumericGreaterThan => NumericComparator::greater_than(actual, expected),
            NumericGreaterThanEquals => NumericComparator::greater_than_equals(actual, expected),

            DateEquals => DateComparator::equals(actual, expected),
            DateNotEquals => DateComparator::not_equals(actual, expected),
            DateLessThan => DateComparator::less_than(actual, expected),
            DateLessThanEquals => DateComparator::less_than_equals(actual, expected),
            DateGreaterThan => DateComparator::greater_than(actual, expected),
            DateGreaterThanEquals => DateComparator::greater_than_equals(actual, expected),

            Bool => BoolComparator::equals(actual, expected),

            StringEqualsIgnoreCase | StringNotEqualsIgnoreCase | Unsupported(_) => {
                debug!(operator = %self, "unsupported condition operator");
                false
            }
        }
    }
}

impl From<String> for ConditionOperator {
    fn from(name: String) -> Self {
        ConditionOperator::KNOWN
            .iter()
            .find(|op| op.as_str() == name)
            .cloned()
            .unwrap_or(ConditionOperator::Unsupported(name))
    }
}

impl From<&str> for ConditionOperator {
    fn from(name: &str) -> Self {
        ConditionOperator::from(name.to_string())
    }
}

impl From<ConditionOperator> for String {
    fn from(op: ConditionOperator) -> Self {
        match op {
            ConditionOperator::Unsupported(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for ConditionOperator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConditionOperator::from(s))
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub operator: ConditionOperator,
    /// Lookup key into the request context
    pub key: String,
    /// Expected value; absent in a document decodes as `Null`
    #[serde(default)]
    pub value: AttributeValue,
}

impl Condition {
    /// Create a new condition
    pub fn new(
        operator: ConditionOperator,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Condition {
            operator,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Evaluate this condition against a context
    pub fn evaluate(&self, context: &Context) -> bool {
        ConditionEvaluator::evaluate(self, context)
    }
}

/// Dispatches a condition to the comparator for its operator's domain
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Evaluate one condition against a request context
    ///
    /// The context value is the "actual" operand, the condition value is the
    /// "expected" one. A key missing from the context fails the condition.
    pub fn evaluate(condition: &Condition, context: &Context) -> bool {
        let Some(actual) = context.get(&condition.key) else {
            trace!(key = %condition.key, "condition key missing from context");
            return false;
        };

        let satisfied = condition.operator.compare(actual, &condition.value);
        trace!(
            operator = %condition.operator,
            key = %condition.key,
            actual = actual.type_name(),
            expected = condition.value.type_name(),
            satisfied,
            "condition evaluated"
        );
        satisfied
    }
}
