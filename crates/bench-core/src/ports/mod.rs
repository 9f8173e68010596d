//! Port traits of the harness.
//!
//! The harness drives two capabilities it does not implement itself: the
//! hash computation under measurement ([`HashTarget`]) and the supplier of
//! fresh password-shaped input ([`InputSource`]). Both are object-safe so
//! the registry and the driver can hold them behind trait objects, and both
//! are what test doubles replace.

use crate::error::TargetError;

/// One pluggable bcrypt implementation under comparison.
///
/// Implementations wrap a complete, self-contained bcrypt codebase. The
/// harness never inspects the returned digest bytes; bcrypt salts
/// internally, so output varies run-to-run and only elapsed time is
/// meaningful. Implementations must not share mutable state: one instance
/// is used by exactly one trial thread at a time.
pub trait HashTarget: Send + Sync {
    /// Compute a bcrypt digest of `password` at the given work factor.
    ///
    /// A cost outside the wrapped implementation's supported range must
    /// surface as [`TargetError::CostOutOfRange`]; the driver then skips
    /// the remaining iterations for that (target, cost) pair without
    /// aborting the sweep.
    fn hash(&self, cost: u32, password: &[u8]) -> Result<Vec<u8>, TargetError>;
}

/// Supplier of fresh, printable-safe password bytes.
///
/// Every call must return a newly generated sequence, independent of all
/// previous calls; the driver invokes it once per warmup and once per
/// measurement iteration, always outside the timed window. Generation must
/// be cheap relative to a bcrypt invocation. That contract lets the
/// driver keep it adjacent to, but never inside, the measured interval.
pub trait InputSource {
    /// Produce the next password byte sequence.
    fn next_password(&mut self) -> Vec<u8>;
}
