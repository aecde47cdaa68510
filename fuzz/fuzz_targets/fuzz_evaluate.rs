#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use policy_engine::iam::{evaluate, Condition, Effect, Policy, Request, Statement};

#[derive(Arbitrary, Debug)]
struct FuzzStatement {
    deny: bool,
    actions: Vec<String>,
    resources: Vec<String>,
    conditions: Vec<(String, String, String)>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    statements: Vec<FuzzStatement>,
    action: String,
    resource: String,
    context: Vec<(String, String)>,
}

fuzz_target!(|input: Input| {
    let statements: Vec<Statement> = input
        .statements
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let effect = if s.deny { Effect::Deny } else { Effect::Allow };
            let mut statement = Statement::new(format!("s{i}"), effect, s.actions, s.resources);
            for (operator, key, value) in s.conditions {
                statement = statement.with_condition(Condition::new(operator.into(), key, value));
            }
            statement
        })
        .collect();

    let mut request = Request::new("fuzz", input.action, input.resource);
    for (key, value) in input.context {
        request = request.with_context(key, value);
    }

    let decision = evaluate(&request, &[Policy::new("p", "Fuzz", statements)]);

    // An allow is only possible when something matched
    if decision.allowed {
        assert!(!decision.matched_rules.is_empty());
    }
});
