#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use policy_engine::iam::PatternMatcher;

#[derive(Arbitrary, Debug)]
struct Input {
    value: String,
    pattern: String,
}

fuzz_target!(|input: Input| {
    let matched = PatternMatcher::matches_pattern(&input.value, &input.pattern);

    // Without wildcards only the exact text matches
    if !input.pattern.contains('*') {
        assert_eq!(matched, input.value == input.pattern);
    }

    assert!(PatternMatcher::matches_pattern(&input.value, "*"));
});
