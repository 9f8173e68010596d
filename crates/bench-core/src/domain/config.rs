//! Trial configuration and validation.
//!
//! A [`TrialConfig`] is the single immutable record driving one benchmark
//! run: which targets are active, which cost values are swept, and how many
//! warmup/measurement iterations each (target, cost) pair receives. It is
//! passed into the driver explicitly, never held as ambient state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Execution mode of one measurement run.
///
/// Only sequential execution is valid: timing comparability depends on the
/// absence of CPU contention between targets, so pairs never run in
/// parallel within a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// One thread, pairs and iterations strictly sequential.
    #[default]
    SingleThreaded,
}

/// Immutable configuration of one benchmark trial.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Active target names. `None` uses each registry entry's own
    /// enabled-by-default flag; `Some` activates exactly the listed names,
    /// letting operators enable registered-but-dormant targets without
    /// touching code.
    pub targets: Option<Vec<String>>,
    /// Work factor values swept per target.
    pub costs: Vec<u32>,
    /// Unmeasured invocations per pair before sampling starts.
    pub warmup_iterations: u32,
    /// Optional hard cap on the warmup phase's wall-clock duration.
    pub warmup_budget: Option<Duration>,
    /// Measured invocations per pair; each yields one timing sample.
    pub measurement_iterations: u32,
    /// Optional hard cap on the measurement phase's wall-clock duration.
    /// When exhausted mid-phase the pair completes with the samples
    /// recorded so far.
    pub measurement_budget: Option<Duration>,
    /// Execution mode. Single-threaded is the only valid value.
    pub concurrency: ConcurrencyMode,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            targets: None,
            costs: vec![10, 12],
            warmup_iterations: 2,
            warmup_budget: None,
            measurement_iterations: 3,
            measurement_budget: None,
            concurrency: ConcurrencyMode::SingleThreaded,
        }
    }
}

impl TrialConfig {
    /// Validate the configuration.
    ///
    /// Configuration errors are the only fatal failure class: they abort
    /// the run before any trial starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.costs.is_empty() {
            return Err(ConfigError::EmptyCosts);
        }
        if self.measurement_iterations == 0 {
            return Err(ConfigError::ZeroMeasurementIterations);
        }
        Ok(())
    }

    /// Whether a registry entry with the given name and default flag is
    /// active under this configuration.
    pub fn is_active(&self, name: &str, enabled_by_default: bool) -> bool {
        match &self.targets {
            Some(active) => active.iter().any(|n| n == name),
            None => enabled_by_default,
        }
    }
}

/// Builder for [`TrialConfig`] with validation.
#[derive(Default)]
pub struct TrialConfigBuilder {
    targets: Option<Vec<String>>,
    costs: Option<Vec<u32>>,
    warmup_iterations: Option<u32>,
    warmup_budget: Option<Duration>,
    measurement_iterations: Option<u32>,
    measurement_budget: Option<Duration>,
}

impl TrialConfigBuilder {
    /// Create a new builder seeded with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate exactly the listed target names.
    pub fn targets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the swept cost values.
    pub fn costs(mut self, costs: impl Into<Vec<u32>>) -> Self {
        self.costs = Some(costs.into());
        self
    }

    /// Set the warmup iteration count.
    pub fn warmup_iterations(mut self, n: u32) -> Self {
        self.warmup_iterations = Some(n);
        self
    }

    /// Cap the warmup phase's wall-clock duration.
    pub fn warmup_budget(mut self, budget: Duration) -> Self {
        self.warmup_budget = Some(budget);
        self
    }

    /// Set the measurement iteration count.
    pub fn measurement_iterations(mut self, n: u32) -> Self {
        self.measurement_iterations = Some(n);
        self
    }

    /// Cap the measurement phase's wall-clock duration.
    pub fn measurement_budget(mut self, budget: Duration) -> Self {
        self.measurement_budget = Some(budget);
        self
    }

    /// Build the configuration, validating all parameters.
    pub fn build(self) -> Result<TrialConfig, ConfigError> {
        let defaults = TrialConfig::default();

        let config = TrialConfig {
            targets: self.targets,
            costs: self.costs.unwrap_or(defaults.costs),
            warmup_iterations: self.warmup_iterations.unwrap_or(defaults.warmup_iterations),
            warmup_budget: self.warmup_budget,
            measurement_iterations: self
                .measurement_iterations
                .unwrap_or(defaults.measurement_iterations),
            measurement_budget: self.measurement_budget,
            concurrency: ConcurrencyMode::SingleThreaded,
        };

        config.validate()?;
        Ok(config)
    }
}
