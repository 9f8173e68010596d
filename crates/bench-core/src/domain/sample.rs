//! Timing samples and trial reports.
//!
//! The driver always hands over raw per-invocation samples, never a phase
//! total, so downstream aggregation (outlier detection, percentiles) stays
//! possible. The summary here is the minimal average-time view; anything
//! richer belongs to the external reporting engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FailureKind;

/// Elapsed wall-clock time of one measured invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSample {
    /// Duration of the `hash` call alone; input generation is excluded.
    pub elapsed: Duration,
}

impl TimingSample {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

/// Structured record of a non-fatal failure, reported instead of samples.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Name of the failing target.
    pub target: String,
    /// Cost value in effect, absent for construction failures.
    pub cost: Option<u32>,
    /// Failure classification.
    pub kind: FailureKind,
    /// Human-readable detail from the underlying error.
    pub detail: String,
}

/// Result of one (target, cost) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PairStatus {
    /// All scheduled iterations ran (or the time budget ended the phase
    /// early); `samples` holds one entry per measured invocation.
    Completed,
    /// An invocation failed; remaining iterations were abandoned.
    Failed(FailureRecord),
}

/// Samples and status for one (target, cost) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairOutcome {
    pub target: String,
    pub cost: u32,
    pub status: PairStatus,
    /// Samples recorded before completion or failure, in invocation order.
    pub samples: Vec<TimingSample>,
}

impl PairOutcome {
    /// Whether the pair completed without failure.
    pub fn succeeded(&self) -> bool {
        matches!(self.status, PairStatus::Completed)
    }

    /// Aggregate the recorded samples, if any.
    pub fn summary(&self) -> Option<SampleSummary> {
        SampleSummary::of(&self.samples)
    }
}

/// Minimal aggregate over a sample sequence.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl SampleSummary {
    /// Compute count/mean/min/max over the samples. `None` when empty.
    pub fn of(samples: &[TimingSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let total: Duration = samples.iter().map(|s| s.elapsed).sum();
        let min = samples.iter().map(|s| s.elapsed).min()?;
        let max = samples.iter().map(|s| s.elapsed).max()?;
        Some(Self {
            count: samples.len(),
            mean: total / samples.len() as u32,
            min,
            max,
        })
    }
}

/// Complete output of one trial: every pair outcome plus targets excluded
/// at registry build time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrialReport {
    pub outcomes: Vec<PairOutcome>,
    /// Construction failures; these targets ran no pairs at all.
    pub setup_failures: Vec<FailureRecord>,
}

impl TrialReport {
    /// Outcomes for a given target name, in sweep order.
    pub fn outcomes_for<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a PairOutcome> + 'a {
        self.outcomes.iter().filter(move |o| o.target == target)
    }
}
