//! Policy evaluation engine with deny precedence
//!
//! Evaluates a request against an ordered set of policies:
//! - Statements are visited policy by policy, in declared order
//! - A matching Allow grants, but scanning continues
//! - A matching Deny is final and returns immediately
//! - No policies, or no matching statement, means deny
//!
//! Evaluation never fails. Anything the engine cannot interpret (unknown
//! operators, uncoercible values, missing context keys) simply does not match.

use super::matcher::StatementMatcher;
use super::policy::{Effect, Policy};
use super::request::{Decision, Request};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, trace};

pub const REASON_NO_POLICIES: &str = "no policies defined";
pub const REASON_NO_MATCH: &str = "no matching policy statement";

/// Evaluate `request` against `policies` (deny-overrides, default deny)
///
/// # Examples
///
/// ```
/// use policy_engine::iam::{evaluate, Effect, Policy, Request, Statement};
///
/// let policy = Policy::new(
///     "p-1",
///     "Documents",
///     vec![Statement::new("s-1", Effect::Allow, ["read"], ["resource:document:*"])],
/// );
///
/// let decision = evaluate(&Request::new("u", "read", "resource:document:42"), &[policy]);
/// assert!(decision.allowed);
/// assert_eq!(decision.matched_rules, vec!["s-1".to_string()]);
/// ```
pub fn evaluate(request: &Request, policies: &[Policy]) -> Decision {
    if policies.is_empty() {
        let decision = Decision::deny(REASON_NO_POLICIES);
        log_decision(request, &decision);
        return decision;
    }

    let mut decision = Decision::deny(REASON_NO_MATCH);

    for policy in policies {
        for statement in &policy.statements {
            if !StatementMatcher::matches(request, statement) {
                continue;
            }

            trace!(
                policy = %policy.id,
                statement = %statement.id,
                effect = %statement.effect,
                "statement matched"
            );
            decision.matched_rules.push(statement.id.clone());

            match statement.effect {
                Effect::Allow => {
                    decision.allowed = true;
                    decision.reason = format!(
                        "Allowed by policy {}, statement {}",
                        policy.id, statement.id
                    );
                }
                Effect::Deny => {
                    // Explicit deny - stop here
                    decision.allowed = false;
                    decision.reason = format!(
                        "Denied by policy {}, statement {}",
                        policy.id, statement.id
                    );
                    log_decision(request, &decision);
                    return decision;
                }
            }
        }
    }

    log_decision(request, &decision);
    decision
}

fn log_decision(request: &Request, decision: &Decision) {
    debug!(
        principal = %request.principal,
        action = %request.action,
        resource = %request.resource,
        allowed = decision.allowed,
        matched = decision.matched_rules.len(),
        reason = %decision.reason,
        "policy decision"
    );
}

/// Evaluator owning an ordered policy set
///
/// `add_policy` takes `&mut self`, so adding while other threads evaluate
/// requires the caller to synchronize. [`SharedPolicyEvaluator`] does that.
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator {
    policies: Vec<Policy>,
}

impl PolicyEvaluator {
    /// Create an evaluator with no policies (denies everything)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policies(policies: Vec<Policy>) -> Self {
        PolicyEvaluator { policies }
    }

    /// Append a policy; it is consulted after all existing ones
    pub fn add_policy(&mut self, policy: Policy) {
        info!(
            policy = %policy.id,
            statements = policy.statements.len(),
            "policy added"
        );
        self.policies.push(policy);
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Evaluate a request against the held policies
    pub fn evaluate(&self, request: &Request) -> Decision {
        evaluate(request, &self.policies)
    }
}

/// Thread-safe evaluator handle
///
/// Clones share one policy set. Evaluations take a read lock, `add_policy`
/// takes a write lock, so a policy is either fully visible to an evaluation
/// or not at all.
#[derive(Debug, Clone, Default)]
pub struct SharedPolicyEvaluator {
    inner: Arc<RwLock<PolicyEvaluator>>,
}

impl SharedPolicyEvaluator {
    pub fn new(evaluator: PolicyEvaluator) -> Self {
        SharedPolicyEvaluator {
            inner: Arc::new(RwLock::new(evaluator)),
        }
    }

    pub fn add_policy(&self, policy: Policy) {
        self.inner.write().add_policy(policy);
    }

    pub fn evaluate(&self, request: &Request) -> Decision {
        self.inner.read().evaluate(request)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current policy set
    pub fn snapshot(&self) -> Vec<Policy> {
        self.inner.read().policies().to_vec()
    }
}

impl From<PolicyEvaluator> for SharedPolicyEvaluator {
    fn from(evaluator: PolicyEvaluator) -> Self {
        SharedPolicyEvaluator::new(evaluator)
    }
}
