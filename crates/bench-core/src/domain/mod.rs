//! Domain layer: pure benchmark-trial logic, no I/O beyond the PRNG.

pub mod config;
pub mod input;
pub mod sample;
pub mod sweep;

pub use config::{ConcurrencyMode, TrialConfig, TrialConfigBuilder};
pub use input::{PasswordGenerator, RAW_PASSWORD_BYTES};
pub use sample::{FailureRecord, PairOutcome, PairStatus, SampleSummary, TimingSample, TrialReport};
pub use sweep::enumerate_pairs;
