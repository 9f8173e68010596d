//! Parameter sweep enumeration.
//!
//! Pure cross product of active targets and configured costs, in a stable
//! order (registry order outer, cost order inner) so runs are reproducible.
//! Macro-level ordering does not affect measurement validity, since only
//! the per-invocation phases need isolation, but a fixed order keeps
//! reports comparable across runs.

/// Enumerate every (target, cost) pair for a trial.
///
/// `targets` must already be filtered to the active set, in registry order.
pub fn enumerate_pairs(targets: &[String], costs: &[u32]) -> Vec<(String, u32)> {
    let mut pairs = Vec::with_capacity(targets.len() * costs.len());
    for target in targets {
        for &cost in costs {
            pairs.push((target.clone(), cost));
        }
    }
    pairs
}
