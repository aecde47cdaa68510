//! Typed comparators for condition evaluation
//!
//! Each comparator coerces both operands into its own domain before comparing.
//! If either coercion fails, every predicate returns `false`, negated ones
//! included: a value that cannot be interpreted never satisfies a condition.

use super::pattern::PatternMatcher;
use super::value::AttributeValue;
use chrono::{DateTime, Utc};

/// Shared predicate set for domains with a total-ish ordering (numbers, dates)
///
/// The inclusive predicates are the disjunction of the strict predicate and
/// `equals`, each coercing its operands on its own.
pub trait OrderedComparator {
    type Value: PartialOrd;

    /// Coerce one operand into the comparator's domain
    fn coerce(value: &AttributeValue) -> Option<Self::Value>;

    fn coerce_pair(
        actual: &AttributeValue,
        expected: &AttributeValue,
    ) -> Option<(Self::Value, Self::Value)> {
        Some((Self::coerce(actual)?, Self::coerce(expected)?))
    }

    fn equals(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected).map_or(false, |(a, e)| a == e)
    }

    fn not_equals(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected).map_or(false, |(a, e)| a != e)
    }

    fn less_than(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected).map_or(false, |(a, e)| a < e)
    }

    fn greater_than(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected).map_or(false, |(a, e)| a > e)
    }

    fn less_than_equals(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::less_than(actual, expected) || Self::equals(actual, expected)
    }

    fn greater_than_equals(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::greater_than(actual, expected) || Self::equals(actual, expected)
    }
}

/// Numeric comparisons over `f64`
///
/// Equality is exact IEEE comparison, no epsilon.
pub struct NumericComparator;

impl OrderedComparator for NumericComparator {
    type Value = f64;

    fn coerce(value: &AttributeValue) -> Option<f64> {
        value.to_f64()
    }
}

/// Date comparisons over UTC instants
pub struct DateComparator;

impl OrderedComparator for DateComparator {
    type Value = DateTime<Utc>;

    fn coerce(value: &AttributeValue) -> Option<DateTime<Utc>> {
        value.to_datetime()
    }
}

/// String comparisons (exact string type on both sides)
pub struct StringComparator;

impl StringComparator {
    fn coerce_pair<'a>(
        actual: &'a AttributeValue,
        expected: &'a AttributeValue,
    ) -> Option<(&'a str, &'a str)> {
        Some((actual.as_str()?, expected.as_str()?))
    }

    pub fn equals(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected).map_or(false, |(a, e)| a == e)
    }

    pub fn not_equals(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected).map_or(false, |(a, e)| a != e)
    }

    /// Wildcard match with the condition value as the pattern
    pub fn like(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected)
            .and_then(|(input, pattern)| Some(PatternMatcher::compile(pattern)?.is_match(input)))
            .unwrap_or(false)
    }

    /// Negated wildcard match; an uncompilable pattern is still a failure
    pub fn not_like(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        Self::coerce_pair(actual, expected)
            .and_then(|(input, pattern)| Some(!PatternMatcher::compile(pattern)?.is_match(input)))
            .unwrap_or(false)
    }
}

/// Boolean comparison (exact boolean type on both sides)
pub struct BoolComparator;

impl BoolComparator {
    pub fn equals(actual: &AttributeValue, expected: &AttributeValue) -> bool {
        match (actual.as_bool(), expected.as_bool()) {
            (Some(a), Some(e)) => a == e,
            _ => false,
        }
    }
}
