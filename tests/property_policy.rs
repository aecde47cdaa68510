//! Property-based tests for evaluation invariants
//!
//! Uses proptest to check that the decision rules hold across random policy sets

use policy_engine::iam::{evaluate, Effect, PatternMatcher, Policy, Request, Statement};
use proptest::prelude::*;

/// Short identifiers over a small alphabet so patterns actually collide
fn token() -> impl Strategy<Value = String> {
    "[a-c:]{0,6}"
}

/// Tokens possibly containing `*` wildcards
fn pattern() -> impl Strategy<Value = String> {
    "[a-c:*]{0,6}"
}

fn statement() -> impl Strategy<Value = Statement> {
    (
        "[a-z]{1,4}",
        prop_oneof![Just(Effect::Allow), Just(Effect::Deny)],
        prop::collection::vec(pattern(), 1..3),
        prop::collection::vec(pattern(), 1..3),
    )
        .prop_map(|(id, effect, actions, resources)| Statement::new(id, effect, actions, resources))
}

fn policies() -> impl Strategy<Value = Vec<Policy>> {
    prop::collection::vec(prop::collection::vec(statement(), 0..4), 0..4).prop_map(|sets| {
        sets.into_iter()
            .enumerate()
            .map(|(i, statements)| Policy::new(format!("p{i}"), "Generated", statements))
            .collect()
    })
}

fn matches(statement: &Statement, request: &Request) -> bool {
    statement
        .actions
        .iter()
        .any(|p| PatternMatcher::matches_pattern(&request.action, p))
        && statement
            .resources
            .iter()
            .any(|p| PatternMatcher::matches_pattern(&request.resource, p))
}

proptest! {
    #[test]
    fn prop_literal_pattern_matches_itself(s in "[^*]{0,16}") {
        prop_assert!(PatternMatcher::matches_pattern(&s, &s));
    }

    #[test]
    fn prop_star_matches_everything(s in ".{0,32}") {
        prop_assert!(PatternMatcher::matches_pattern(&s, "*"));
    }

    #[test]
    fn prop_prefix_wildcard(prefix in "[^*]{0,8}", rest in ".{0,8}") {
        let input = format!("{prefix}{rest}");
        let pattern = format!("{prefix}*");
        prop_assert!(PatternMatcher::matches_pattern(&input, &pattern));
    }

    #[test]
    fn prop_decision_follows_matching_statements(
        policies in policies(),
        action in token(),
        resource in token(),
    ) {
        let request = Request::new("u", action, resource);
        let decision = evaluate(&request, &policies);

        let matching: Vec<&Statement> = policies
            .iter()
            .flat_map(|p| p.statements.iter())
            .filter(|s| matches(s, &request))
            .collect();

        let any_deny = matching.iter().any(|s| s.effect == Effect::Deny);
        let any_allow = matching.iter().any(|s| s.effect == Effect::Allow);

        // Deny overrides, otherwise any allow grants, otherwise default deny
        prop_assert_eq!(decision.allowed, any_allow && !any_deny);

        // The trail is the matching prefix up to and including the first deny
        let cut = matching
            .iter()
            .position(|s| s.effect == Effect::Deny)
            .map_or(matching.len(), |i| i + 1);
        let expected: Vec<String> = matching[..cut].iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(decision.matched_rules, expected);
    }

    #[test]
    fn prop_deny_wins_in_any_order(
        mut policies in policies(),
        action in token(),
        resource in token(),
        rotate in 0usize..8,
    ) {
        let request = Request::new("u", action, resource);
        let before = evaluate(&request, &policies).allowed;

        if !policies.is_empty() {
            let len = policies.len();
            policies.rotate_left(rotate % len);
        }
        let after = evaluate(&request, &policies).allowed;

        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_adding_deny_never_grants(
        policies in policies(),
        action in token(),
        resource in token(),
        deny_resource in pattern(),
    ) {
        let request = Request::new("u", action, resource);
        let before = evaluate(&request, &policies).allowed;

        let mut extended = policies.clone();
        extended.push(Policy::new(
            "deny",
            "Deny",
            vec![Statement::new("d", Effect::Deny, ["*"], [deny_resource])],
        ));
        let after = evaluate(&request, &extended).allowed;

        prop_assert!(!after || before);
    }
}
