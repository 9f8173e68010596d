//! # bench-core
//!
//! Core of the comparative bcrypt micro-benchmark harness: measures the
//! average wall-clock cost of computing a bcrypt digest under configurable
//! work factors, across pluggable implementations, while keeping the
//! classic microbenchmark artifacts out of the measured window.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure trial logic
//!   - `TrialConfig` / `TrialConfigBuilder`: immutable run configuration
//!     with validation
//!   - `PasswordGenerator`: fresh printable-safe input per invocation
//!   - `TimingSample`, `PairOutcome`, `TrialReport`: raw per-invocation
//!     results handed to an external reporting engine
//!   - `enumerate_pairs`: deterministic (target, cost) sweep
//!
//! - **Ports Layer** (`ports/`): trait contracts
//!   - `HashTarget`: the capability every comparison subject implements
//!   - `InputSource`: supplier of fresh password bytes (replaceable by
//!     test doubles)
//!
//! - **Registry** (`registry`): one instance per active target, built once
//!   per trial during setup
//!
//! - **Driver** (`driver`): warmup phase, measured phase, per-invocation
//!   fresh input, failure isolation
//!
//! ## Measurement invariants
//!
//! - Input generation happens before the clock starts, every invocation.
//! - Target construction happens once per trial, never per invocation.
//! - Warmup invocations are never recorded.
//! - A failing invocation aborts its (target, cost) pair only; the sweep
//!   continues and the failure is reported as a structured record.
//! - Pairs and iterations run strictly sequentially on one thread.
//!
//! ## Usage
//!
//! ```ignore
//! use bench_core::{PasswordGenerator, TargetRegistry, TrialConfig, TrialDriver};
//!
//! let mut registry = TargetRegistry::new();
//! registry.register("my-bcrypt", true, || Ok(Box::new(MyBcrypt)));
//!
//! let driver = TrialDriver::new(TrialConfig::default())?;
//! let report = driver.run(&registry, &mut PasswordGenerator::new())?;
//! for outcome in &report.outcomes {
//!     println!("{} cost={} samples={}", outcome.target, outcome.cost, outcome.samples.len());
//! }
//! ```

pub mod domain;
pub mod driver;
pub mod error;
pub mod ports;
pub mod registry;

// Re-exports for convenience
pub use domain::{
    enumerate_pairs, ConcurrencyMode, FailureRecord, PairOutcome, PairStatus, PasswordGenerator,
    SampleSummary, TimingSample, TrialConfig, TrialConfigBuilder, TrialReport,
};
pub use driver::TrialDriver;
pub use error::{ConfigError, FailureKind, TargetError};
pub use ports::{HashTarget, InputSource};
pub use registry::{BuiltRegistry, TargetRegistry};
