#![no_main]
use libfuzzer_sys::fuzz_target;
use policy_engine::iam::{evaluate, from_json_list, Policy, Request};
use policy_engine::validation::PolicyValidator;

// Malformed documents must be rejected with an error, never a panic
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(policy) = Policy::from_json(text) {
        let _ = PolicyValidator::default().validate(&policy);

        if let Ok(json) = policy.to_json() {
            if let Ok(reparsed) = Policy::from_json(&json) {
                assert_eq!(reparsed.statements.len(), policy.statements.len());
            }
        }

        let _ = evaluate(&Request::new("fuzz", "read", "resource:fuzz"), &[policy]);
    }

    let _ = from_json_list(text);
});
