//! Error types for the benchmark harness.
//!
//! Two layers, mirroring the propagation policy: `TargetError` is what a
//! comparison target (or its constructor) returns, `ConfigError` is the one
//! fatal class that aborts a run before any trial starts. Everything a
//! target raises is caught at the driver boundary and converted into a
//! [`FailureRecord`](crate::domain::FailureRecord), never propagated up.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a comparison target can raise during construction or hashing.
#[derive(Debug, Error)]
pub enum TargetError {
    /// The requested work factor is outside the wrapped implementation's
    /// supported range.
    #[error("cost factor {cost} outside supported range {min}..={max}")]
    CostOutOfRange { cost: u32, min: u32, max: u32 },

    /// The wrapped implementation failed for any other reason.
    #[error("backend failure: {0}")]
    Backend(String),

    /// The target could not be constructed during registry build.
    #[error("target construction failed: {0}")]
    Construction(String),
}

/// Fatal configuration errors.
///
/// These are the only failures that abort a whole run; everything else is
/// downgraded to a per-pair failure record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cost set is empty")]
    EmptyCosts,

    #[error("measurement iteration count cannot be 0")]
    ZeroMeasurementIterations,

    #[error("active target override names unknown target: {0}")]
    UnknownTarget(String),
}

/// Classification of a non-fatal failure, as surfaced in the trial report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Cost factor rejected by the target as out of range.
    InvalidParameter,
    /// The target errored while computing a hash.
    TargetFailure,
    /// The target's constructor failed; it is excluded from the trial.
    SetupFailure,
}

impl FailureKind {
    /// Classify a target error into its report category.
    pub fn classify(err: &TargetError) -> Self {
        match err {
            TargetError::CostOutOfRange { .. } => FailureKind::InvalidParameter,
            TargetError::Backend(_) => FailureKind::TargetFailure,
            TargetError::Construction(_) => FailureKind::SetupFailure,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::InvalidParameter => write!(f, "invalid-parameter"),
            FailureKind::TargetFailure => write!(f, "target-failure"),
            FailureKind::SetupFailure => write!(f, "setup-failure"),
        }
    }
}
