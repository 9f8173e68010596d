//! End-to-end harness properties.
//!
//! Each test drives a full sweep through the public API with doubles from
//! [`crate::doubles`], checking the measurement-isolation and
//! failure-isolation guarantees the driver makes.

use std::collections::HashSet;
use std::time::Duration;

use bench_core::{
    FailureKind, PairStatus, PasswordGenerator, TargetRegistry, TrialConfigBuilder, TrialDriver,
    TrialReport,
};

use crate::doubles::{
    DelayedInput, FailingTarget, FastTarget, LimitedCostTarget, RecordingInput, SlowTarget,
};

fn driver(targets: &[&str], costs: &[u32], warmup: u32, measurement: u32) -> TrialDriver {
    let config = TrialConfigBuilder::new()
        .targets(targets.iter().copied())
        .costs(costs.to_vec())
        .warmup_iterations(warmup)
        .measurement_iterations(measurement)
        .build()
        .expect("valid config");
    TrialDriver::new(config).expect("valid driver")
}

fn outcome<'a>(report: &'a TrialReport, target: &str, cost: u32) -> &'a bench_core::PairOutcome {
    report
        .outcomes
        .iter()
        .find(|o| o.target == target && o.cost == cost)
        .expect("pair present in report")
}

#[test]
fn test_successful_pairs_yield_exact_sample_count() {
    let mut registry = TargetRegistry::new();
    registry.register("one", true, || Ok(Box::new(FastTarget)));
    registry.register("two", true, || Ok(Box::new(FastTarget)));

    let driver = driver(&["one", "two"], &[10, 12], 2, 3);
    let report = driver
        .run(&registry, &mut PasswordGenerator::from_seed(1))
        .unwrap();

    assert_eq!(report.outcomes.len(), 4);
    for outcome in &report.outcomes {
        assert!(outcome.succeeded());
        assert_eq!(outcome.samples.len(), 3);
    }
}

#[test]
fn test_generator_delay_does_not_appear_in_samples() {
    let mut registry = TargetRegistry::new();
    registry.register("fast", true, || Ok(Box::new(FastTarget)));

    let delay = Duration::from_millis(20);
    let mut input = DelayedInput::new(PasswordGenerator::from_seed(2), delay);

    let driver = driver(&["fast"], &[10], 1, 5);
    let report = driver.run(&registry, &mut input).unwrap();

    let outcome = outcome(&report, "fast", 10);
    assert_eq!(outcome.samples.len(), 5);
    let summary = outcome.summary().unwrap();
    // Generation ran 6 times at 20ms each; a contaminated window would push
    // the mean to ~20ms. The fast target itself is far below 5ms.
    assert!(
        summary.mean < Duration::from_millis(5),
        "generation latency leaked into samples: mean {:?}",
        summary.mean
    );
}

#[test]
fn test_every_invocation_draws_fresh_input() {
    let mut registry = TargetRegistry::new();
    registry.register("fast", true, || Ok(Box::new(FastTarget)));

    let mut input = RecordingInput::new(PasswordGenerator::from_seed(3));
    let warmup = 2u32;
    let measurement = 3u32;

    let driver = driver(&["fast"], &[10, 12], warmup, measurement);
    driver.run(&registry, &mut input).unwrap();

    let expected = ((warmup + measurement) * 2) as usize;
    assert_eq!(input.call_count(), expected);

    let generated = input.generated.lock().unwrap();
    let distinct: HashSet<&Vec<u8>> = generated.iter().collect();
    assert_eq!(distinct.len(), generated.len(), "input was reused");
}

#[test]
fn test_failing_target_does_not_disturb_other_targets() {
    let mut registry = TargetRegistry::new();
    registry.register("failing", true, || Ok(Box::new(FailingTarget)));
    registry.register("fast", true, || Ok(Box::new(FastTarget)));

    let driver = driver(&["failing", "fast"], &[10, 12], 2, 3);
    let report = driver
        .run(&registry, &mut PasswordGenerator::from_seed(4))
        .unwrap();

    for cost in [10, 12] {
        let failed = outcome(&report, "failing", cost);
        assert!(!failed.succeeded());
        assert!(failed.samples.is_empty());
        match &failed.status {
            PairStatus::Failed(record) => {
                assert_eq!(record.kind, FailureKind::TargetFailure);
                assert_eq!(record.cost, Some(cost));
            }
            PairStatus::Completed => panic!("expected failure"),
        }

        let ok = outcome(&report, "fast", cost);
        assert!(ok.succeeded());
        assert_eq!(ok.samples.len(), 3);
    }
}

#[test]
fn test_failure_classification_is_idempotent_across_runs() {
    let run = || {
        let mut registry = TargetRegistry::new();
        registry.register("limited", true, || {
            Ok(Box::new(LimitedCostTarget { max_cost: 20 }))
        });
        let driver = driver(&["limited"], &[99], 2, 3);
        let report = driver
            .run(&registry, &mut PasswordGenerator::from_seed(5))
            .unwrap();
        match &report.outcomes[0].status {
            PairStatus::Failed(record) => (record.kind, record.detail.clone()),
            PairStatus::Completed => panic!("expected failure"),
        }
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(first.0, FailureKind::InvalidParameter);
}

#[test]
fn test_fast_and_slow_targets_report_their_real_cost() {
    let mut registry = TargetRegistry::new();
    registry.register("fast", true, || Ok(Box::new(FastTarget)));
    registry.register("slow", true, || {
        Ok(Box::new(SlowTarget {
            delay: Duration::from_millis(50),
        }))
    });

    let driver = driver(&["fast", "slow"], &[10], 2, 3);
    let report = driver
        .run(&registry, &mut PasswordGenerator::from_seed(6))
        .unwrap();

    let fast = outcome(&report, "fast", 10);
    assert!(fast.succeeded());
    assert_eq!(fast.samples.len(), 3);
    assert!(fast.summary().unwrap().mean < Duration::from_millis(10));

    let slow = outcome(&report, "slow", 10);
    assert!(slow.succeeded());
    assert_eq!(slow.samples.len(), 3);
    let mean = slow.summary().unwrap().mean;
    assert!(
        mean >= Duration::from_millis(50) && mean < Duration::from_millis(150),
        "slow mean out of expected band: {mean:?}"
    );
}

#[test]
fn test_out_of_range_cost_skips_pair_but_sweep_completes() {
    let mut registry = TargetRegistry::new();
    registry.register("limited", true, || {
        Ok(Box::new(LimitedCostTarget { max_cost: 20 }))
    });
    registry.register("fast", true, || Ok(Box::new(FastTarget)));

    let driver = driver(&["limited", "fast"], &[10, 99], 1, 2);
    let report = driver
        .run(&registry, &mut PasswordGenerator::from_seed(7))
        .unwrap();

    assert_eq!(report.outcomes.len(), 4);

    let rejected = outcome(&report, "limited", 99);
    assert!(rejected.samples.is_empty());
    match &rejected.status {
        PairStatus::Failed(record) => assert_eq!(record.kind, FailureKind::InvalidParameter),
        PairStatus::Completed => panic!("expected invalid-parameter failure"),
    }

    // Valid cost for the same target still measures.
    assert_eq!(outcome(&report, "limited", 10).samples.len(), 2);
    // 99 is within the fast double's accepted range, so its pair proceeds.
    assert_eq!(outcome(&report, "fast", 99).samples.len(), 2);
}

#[test]
fn test_exhausted_measurement_budget_completes_pair_with_partial_samples() {
    let mut registry = TargetRegistry::new();
    registry.register("slow", true, || {
        Ok(Box::new(SlowTarget {
            delay: Duration::from_millis(20),
        }))
    });

    let config = TrialConfigBuilder::new()
        .targets(["slow"])
        .costs([10])
        .warmup_iterations(1)
        .measurement_iterations(50)
        .measurement_budget(Duration::from_millis(70))
        .build()
        .unwrap();
    let driver = TrialDriver::new(config).unwrap();

    let report = driver
        .run(&registry, &mut PasswordGenerator::from_seed(8))
        .unwrap();

    let outcome = outcome(&report, "slow", 10);
    // The budget ends the phase early; the pair still reports success with
    // the samples recorded so far.
    assert!(matches!(outcome.status, PairStatus::Completed));
    assert!(!outcome.samples.is_empty());
    assert!(
        outcome.samples.len() < 50,
        "budget did not cut the phase short: {} samples",
        outcome.samples.len()
    );
}

#[test]
fn test_exhausted_warmup_budget_still_runs_full_measurement() {
    let mut registry = TargetRegistry::new();
    registry.register("slow", true, || {
        Ok(Box::new(SlowTarget {
            delay: Duration::from_millis(20),
        }))
    });

    let config = TrialConfigBuilder::new()
        .targets(["slow"])
        .costs([10])
        .warmup_iterations(100)
        .warmup_budget(Duration::from_millis(50))
        .measurement_iterations(2)
        .build()
        .unwrap();
    let driver = TrialDriver::new(config).unwrap();

    let mut input = RecordingInput::new(PasswordGenerator::from_seed(9));
    let report = driver.run(&registry, &mut input).unwrap();

    let outcome = outcome(&report, "slow", 10);
    assert!(matches!(outcome.status, PairStatus::Completed));
    assert_eq!(outcome.samples.len(), 2);
    // Warmup was cut off by its budget long before 100 iterations; all
    // measurement invocations still ran.
    assert!(
        input.call_count() < 20,
        "warmup budget was not honored: {} generator calls",
        input.call_count()
    );
}

#[test]
fn test_real_bcrypt_targets_run_end_to_end_at_minimum_cost() {
    let registry = bench_targets::default_registry();

    let config = TrialConfigBuilder::new()
        .targets(["bcrypt", "pwhash", "bcrypt-no-getrandom"])
        .costs([4])
        .warmup_iterations(1)
        .measurement_iterations(2)
        .build()
        .unwrap();
    let driver = TrialDriver::new(config).unwrap();

    let report = driver
        .run(&registry, &mut PasswordGenerator::new())
        .unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert!(report.setup_failures.is_empty());
    for outcome in &report.outcomes {
        assert!(outcome.succeeded(), "{} failed", outcome.target);
        assert_eq!(outcome.samples.len(), 2);
        assert!(outcome.samples.iter().all(|s| s.elapsed > Duration::ZERO));
    }
}
