//! Attribute-based access control
//!
//! Provides policy evaluation with:
//! - JSON policy documents (Allow/Deny statements)
//! - Explicit deny precedence and default deny
//! - `*` wildcard matching for actions and resources
//! - Condition evaluation over request context (String, Numeric, Date, Bool)
//!
//! Evaluation is stateless and never fails: anything the engine cannot
//! interpret leaves the statement unmatched.

mod builder;
mod comparator;
mod condition;
mod engine;
mod matcher;
mod pattern;
mod policy;
mod request;
mod value;

pub use builder::PolicyBuilder;
pub use comparator::{
    BoolComparator, DateComparator, NumericComparator, OrderedComparator, StringComparator,
};
pub use condition::{Condition, ConditionEvaluator, ConditionOperator, ValueDomain};
pub use engine::{
    evaluate, PolicyEvaluator, SharedPolicyEvaluator, REASON_NO_MATCH, REASON_NO_POLICIES,
};
pub use matcher::StatementMatcher;
pub use pattern::PatternMatcher;
pub use policy::{
    from_json_array, from_json_list, to_json_list, to_json_list_pretty, Effect, Policy,
    PolicyList, Statement, POLICY_VERSION,
};
pub use request::{Decision, Request};
pub use value::{AttributeValue, Context};
