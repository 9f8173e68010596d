//! Trial driver: the timing loop.
//!
//! For each (target, cost) pair the driver runs an unmeasured warmup phase
//! and then a measured phase. Fresh input is drawn before the clock starts
//! on every invocation, as an explicit pre-timing step: the exclusion of
//! generation cost from the timed window is auditable in this loop rather
//! than hidden in a lifecycle hook. Execution is strictly sequential: one
//! thread, one pair at a time, iterations in order.

use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::config::TrialConfig;
use crate::domain::sample::{FailureRecord, PairOutcome, PairStatus, TimingSample, TrialReport};
use crate::domain::sweep::enumerate_pairs;
use crate::error::{ConfigError, FailureKind, TargetError};
use crate::ports::{HashTarget, InputSource};
use crate::registry::TargetRegistry;

/// Runs one benchmark trial over a registry of comparison targets.
pub struct TrialDriver {
    config: TrialConfig,
}

impl TrialDriver {
    /// Create a driver for a validated configuration.
    pub fn new(config: TrialConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Run the full sweep.
    ///
    /// Builds the registry once (setup cost stays outside every measured
    /// interval), enumerates the (target, cost) cross product, and runs
    /// each pair to completion or failure. A failing pair never aborts the
    /// sweep; only a configuration error is fatal.
    pub fn run(
        &self,
        registry: &TargetRegistry,
        input: &mut dyn InputSource,
    ) -> Result<TrialReport, ConfigError> {
        let built = registry.build(&self.config)?;
        let pairs = enumerate_pairs(&built.names(), &self.config.costs);

        let mut report = TrialReport {
            outcomes: Vec::with_capacity(pairs.len()),
            setup_failures: built.setup_failures,
        };

        for (name, cost) in pairs {
            let Some(target) = built
                .targets
                .iter()
                .find(|(n, _)| n == &name)
                .map(|(_, t)| t.as_ref())
            else {
                continue;
            };
            report.outcomes.push(self.run_pair(&name, cost, target, input));
        }

        Ok(report)
    }

    /// Run warmup and measurement for a single (target, cost) pair.
    fn run_pair(
        &self,
        name: &str,
        cost: u32,
        target: &dyn HashTarget,
        input: &mut dyn InputSource,
    ) -> PairOutcome {
        debug!(target_name = name, cost, "starting pair");

        // Warmup: identical invocations, nothing recorded. Lets the
        // implementation reach steady state before sampling begins.
        let warmup_deadline = self.config.warmup_budget.map(|b| Instant::now() + b);
        for _ in 0..self.config.warmup_iterations {
            if deadline_passed(warmup_deadline) {
                break;
            }
            let password = input.next_password();
            if let Err(err) = target.hash(cost, &password) {
                return self.failed_pair(name, cost, err, Vec::new());
            }
        }

        // Measurement: only the hash call sits between the clock reads.
        let mut samples = Vec::with_capacity(self.config.measurement_iterations as usize);
        let measurement_deadline = self.config.measurement_budget.map(|b| Instant::now() + b);
        for _ in 0..self.config.measurement_iterations {
            if deadline_passed(measurement_deadline) {
                debug!(target_name = name, cost, recorded = samples.len(), "measurement budget exhausted");
                break;
            }
            let password = input.next_password();
            let started = Instant::now();
            let result = target.hash(cost, &password);
            let elapsed = started.elapsed();
            match result {
                Ok(_) => samples.push(TimingSample::new(elapsed)),
                Err(err) => return self.failed_pair(name, cost, err, samples),
            }
        }

        debug!(target_name = name, cost, samples = samples.len(), "pair completed");
        PairOutcome {
            target: name.to_string(),
            cost,
            status: PairStatus::Completed,
            samples,
        }
    }

    fn failed_pair(
        &self,
        name: &str,
        cost: u32,
        err: TargetError,
        samples: Vec<TimingSample>,
    ) -> PairOutcome {
        let kind = FailureKind::classify(&err);
        warn!(target_name = name, cost, %kind, error = %err, "pair aborted");
        PairOutcome {
            target: name.to_string(),
            cost,
            status: PairStatus::Failed(FailureRecord {
                target: name.to_string(),
                cost: Some(cost),
                kind,
                detail: err.to_string(),
            }),
            samples,
        }
    }
}

fn deadline_passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}
