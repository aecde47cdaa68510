use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use policy_engine::iam::{
    evaluate, Condition, ConditionOperator, Effect, PatternMatcher, Policy, PolicyEvaluator,
    Request, SharedPolicyEvaluator, Statement,
};

/// Read/write split plus a conditional admin grant
fn create_complex_policy() -> Policy {
    Policy::new(
        "p-bench",
        "Bench",
        vec![
            Statement::new("read", Effect::Allow, ["read", "list", "get"], ["resource:*"]),
            Statement::new(
                "edit-own",
                Effect::Allow,
                ["read", "write"],
                ["resource:users:*:documents:*"],
            ),
            Statement::new("admin", Effect::Allow, ["*"], ["*"]).with_condition(Condition::new(
                ConditionOperator::StringEquals,
                "user.role",
                "admin",
            )),
            Statement::new("system", Effect::Deny, ["write", "delete"], ["resource:system:*"]),
        ],
    )
}

/// Benchmark plain evaluation throughput
fn bench_policy_eval(c: &mut Criterion) {
    let eval_counts = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("policy_eval");

    for count in eval_counts {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let policies = vec![create_complex_policy()];
            let request = Request::new("u", "read", "resource:public:readme");

            b.iter(|| {
                for _ in 0..count {
                    let decision = evaluate(&request, &policies);
                    black_box(decision.allowed);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark wildcard pattern matching performance
fn bench_wildcard_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("wildcard_matching");

    group.bench_function("exact", |b| {
        b.iter(|| black_box(PatternMatcher::matches_pattern("resource:doc1", "resource:doc1")));
    });

    group.bench_function("trailing_wildcard", |b| {
        b.iter(|| {
            for i in 0..100 {
                let input = format!("resource:document:{}", i);
                black_box(PatternMatcher::matches_pattern(&input, "resource:*"));
            }
        });
    });

    group.bench_function("mixed_wildcards", |b| {
        b.iter(|| {
            for i in 0..100 {
                let input = format!("resource:users:user{}:documents:report.txt", i);
                black_box(PatternMatcher::matches_pattern(
                    &input,
                    "resource:users:*:documents:*.txt",
                ));
            }
        });
    });

    group.finish();
}

/// Benchmark conditions against request context
fn bench_conditions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conditions");

    let statement = Statement::new("s", Effect::Allow, ["*"], ["*"])
        .with_condition(Condition::new(ConditionOperator::StringLike, "email", "*@example.com"))
        .with_condition(Condition::new(ConditionOperator::NumericLessThan, "risk", 50i64))
        .with_condition(Condition::new(
            ConditionOperator::DateLessThan,
            "request.time",
            "2030-01-01T00:00:00Z",
        ))
        .with_condition(Condition::new(ConditionOperator::Bool, "mfa", true));
    let policies = vec![Policy::new("p", "Conditions", vec![statement])];

    let request = Request::new("u", "read", "resource:x")
        .with_context("email", "alice@example.com")
        .with_context("risk", "12")
        .with_context("request.time", "2024-06-01 12:00:00")
        .with_context("mfa", true);

    group.bench_function("four_conditions", |b| {
        b.iter(|| black_box(evaluate(&request, &policies).allowed));
    });

    group.finish();
}

/// Benchmark policy sets with many statements
fn bench_policy_complexity(c: &mut Criterion) {
    let statement_counts = vec![5, 25, 100];

    let mut group = c.benchmark_group("policy_complexity");

    for count in statement_counts {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let statements = (0..count)
                .map(|i| {
                    Statement::new(
                        format!("s-{}", i),
                        Effect::Allow,
                        ["read"],
                        [format!("path_{}:*", i)],
                    )
                })
                .collect();
            let evaluator = PolicyEvaluator::with_policies(vec![Policy::new("p", "Many", statements)]);

            b.iter(|| {
                // Every statement is visited regardless of where the match is
                for i in 0..100 {
                    let resource = format!("path_{}:file.txt", i % count);
                    let decision = evaluator.evaluate(&Request::new("u", "read", resource));
                    black_box(decision.allowed);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark deny vs allow evaluation
fn bench_deny_vs_allow(c: &mut Criterion) {
    let mut group = c.benchmark_group("deny_vs_allow");
    let policies = vec![create_complex_policy()];

    group.bench_function("allow_match", |b| {
        b.iter(|| {
            for i in 0..100 {
                let request = Request::new("u", "read", format!("resource:file_{}", i));
                black_box(evaluate(&request, &policies).allowed);
            }
        });
    });

    group.bench_function("deny_match", |b| {
        b.iter(|| {
            for i in 0..100 {
                let request = Request::new("u", "write", format!("resource:system:file_{}", i));
                black_box(evaluate(&request, &policies).allowed);
            }
        });
    });

    group.finish();
}

/// Benchmark the locked evaluator against the bare one
fn bench_shared_evaluator(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_evaluator");
    let request = Request::new("u", "read", "resource:public:readme");

    group.bench_function("plain", |b| {
        let evaluator = PolicyEvaluator::with_policies(vec![create_complex_policy()]);
        b.iter(|| black_box(evaluator.evaluate(&request).allowed));
    });

    group.bench_function("shared", |b| {
        let evaluator =
            SharedPolicyEvaluator::new(PolicyEvaluator::with_policies(vec![create_complex_policy()]));
        b.iter(|| black_box(evaluator.evaluate(&request).allowed));
    });

    group.bench_function("shared_random_resources", |b| {
        let evaluator =
            SharedPolicyEvaluator::new(PolicyEvaluator::with_policies(vec![create_complex_policy()]));
        b.iter(|| {
            let i = rand::random::<usize>() % 1_000;
            let request = Request::new("u", "read", format!("resource:file_{}", i));
            black_box(evaluator.evaluate(&request).allowed)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_policy_eval,
    bench_wildcard_matching,
    bench_conditions,
    bench_policy_complexity,
    bench_deny_vs_allow,
    bench_shared_evaluator,
);
criterion_main!(benches);
