//! Statement applicability
//!
//! A statement applies to a request when one of its action patterns matches
//! the action, one of its resource patterns matches the resource, and every
//! condition holds. Checks run in that order and stop at the first failure,
//! so conditions are never consulted for out-of-scope requests.

use super::pattern::PatternMatcher;
use super::policy::Statement;
use super::request::Request;

pub struct StatementMatcher;

impl StatementMatcher {
    /// Check if `statement` applies to `request`
    pub fn matches(request: &Request, statement: &Statement) -> bool {
        Self::matches_action(request, statement)
            && Self::matches_resource(request, statement)
            && Self::conditions_hold(request, statement)
    }

    fn matches_action(request: &Request, statement: &Statement) -> bool {
        statement
            .actions
            .iter()
            .any(|pattern| PatternMatcher::matches_pattern(&request.action, pattern))
    }

    fn matches_resource(request: &Request, statement: &Statement) -> bool {
        statement
            .resources
            .iter()
            .any(|pattern| PatternMatcher::matches_pattern(&request.resource, pattern))
    }

    /// Empty condition list holds vacuously
    fn conditions_hold(request: &Request, statement: &Statement) -> bool {
        statement
            .conditions
            .iter()
            .all(|condition| condition.evaluate(&request.context))
    }
}
