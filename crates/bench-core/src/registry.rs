//! Target registry.
//!
//! Holds one named constructor per comparison subject. Construction runs
//! exactly once per trial, during setup, so expensive one-time work (state
//! loading, lazy initialization inside the wrapped library) never lands in
//! a measured interval. Entries carry an enabled-by-default flag: a subject
//! can stay registered but administratively dormant, and a config override
//! can switch it on without code changes.

use tracing::warn;

use crate::domain::config::TrialConfig;
use crate::domain::sample::FailureRecord;
use crate::error::{ConfigError, FailureKind, TargetError};
use crate::ports::HashTarget;

type TargetCtor = Box<dyn Fn() -> Result<Box<dyn HashTarget>, TargetError>>;

struct Entry {
    name: String,
    enabled_by_default: bool,
    ctor: TargetCtor,
}

/// Ordered collection of registered comparison targets.
#[derive(Default)]
pub struct TargetRegistry {
    entries: Vec<Entry>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a comparison target under a unique name.
    pub fn register<F>(&mut self, name: impl Into<String>, enabled_by_default: bool, ctor: F)
    where
        F: Fn() -> Result<Box<dyn HashTarget>, TargetError> + 'static,
    {
        self.entries.push(Entry {
            name: name.into(),
            enabled_by_default,
            ctor: Box::new(ctor),
        });
    }

    /// Names of all registered targets, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Build one instance per active target.
    ///
    /// A constructor error excludes only that target (recorded as a setup
    /// failure); the rest of the trial proceeds. An active-set override
    /// naming an unregistered target is a configuration error and fatal.
    pub fn build(&self, config: &TrialConfig) -> Result<BuiltRegistry, ConfigError> {
        if let Some(active) = &config.targets {
            for name in active {
                if !self.entries.iter().any(|e| &e.name == name) {
                    return Err(ConfigError::UnknownTarget(name.clone()));
                }
            }
        }

        let mut built = BuiltRegistry::default();
        for entry in &self.entries {
            if !config.is_active(&entry.name, entry.enabled_by_default) {
                continue;
            }
            match (entry.ctor)() {
                Ok(target) => built.targets.push((entry.name.clone(), target)),
                Err(err) => {
                    warn!(target_name = %entry.name, error = %err, "target construction failed; excluding from trial");
                    built.setup_failures.push(FailureRecord {
                        target: entry.name.clone(),
                        cost: None,
                        kind: FailureKind::SetupFailure,
                        detail: err.to_string(),
                    });
                }
            }
        }
        Ok(built)
    }
}

/// Instances constructed for one trial, in registration order.
#[derive(Default)]
pub struct BuiltRegistry {
    pub targets: Vec<(String, Box<dyn HashTarget>)>,
    pub setup_failures: Vec<FailureRecord>,
}

impl BuiltRegistry {
    /// Active target names in sweep order.
    pub fn names(&self) -> Vec<String> {
        self.targets.iter().map(|(n, _)| n.clone()).collect()
    }
}

impl std::fmt::Debug for BuiltRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltRegistry")
            .field("targets", &self.names())
            .field("setup_failures", &self.setup_failures)
            .finish()
    }
}
