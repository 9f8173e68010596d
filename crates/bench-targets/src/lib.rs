//! # bench-targets
//!
//! The comparison subjects: three interchangeable `HashTarget`
//! implementations, each wrapping a distinct bcrypt codebase.
//!
//! | Target | Crate | Default |
//! |--------|-------|---------|
//! | `bcrypt` | mainstream rust-bcrypt | enabled |
//! | `pwhash` | independent bcrypt in `pwhash` | dormant |
//! | `bcrypt-no-getrandom` | caller-supplies-salt fork | dormant |
//!
//! Dormant targets stay registered so a trial configuration can activate
//! them without code changes:
//!
//! ```ignore
//! let config = TrialConfigBuilder::new()
//!     .targets(["bcrypt", "pwhash", "bcrypt-no-getrandom"])
//!     .build()?;
//! ```

mod pwhash_bcrypt;
mod rust_bcrypt;
mod salted_bcrypt;

pub use pwhash_bcrypt::PwhashBcrypt;
pub use rust_bcrypt::RustBcrypt;
pub use salted_bcrypt::SaltedBcrypt;

use bench_core::TargetRegistry;

/// Build the standard registry of bcrypt comparison targets.
///
/// Registration order fixes the sweep order. Only the primary target is
/// enabled by default; the others are activated through the trial
/// configuration.
pub fn default_registry() -> TargetRegistry {
    let mut registry = TargetRegistry::new();
    registry.register(RustBcrypt::NAME, true, || Ok(Box::new(RustBcrypt)));
    registry.register(PwhashBcrypt::NAME, false, || Ok(Box::new(PwhashBcrypt)));
    registry.register(SaltedBcrypt::NAME, false, || Ok(Box::new(SaltedBcrypt)));
    registry
}
