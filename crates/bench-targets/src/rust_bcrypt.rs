//! Comparison target wrapping the mainstream `bcrypt` crate.
//!
//! This is the primary subject of the comparison and the only target
//! enabled by default. The crate salts internally, so every call produces
//! a different digest for the same password.

use bcrypt::BcryptError;

use bench_core::{HashTarget, TargetError};

/// Cost range accepted by rust-bcrypt.
const COST_MIN: u32 = 4;
const COST_MAX: u32 = 31;

/// The `bcrypt` crate as a comparison target.
#[derive(Default)]
pub struct RustBcrypt;

impl RustBcrypt {
    pub const NAME: &'static str = "bcrypt";
}

impl HashTarget for RustBcrypt {
    fn hash(&self, cost: u32, password: &[u8]) -> Result<Vec<u8>, TargetError> {
        match bcrypt::hash(password, cost) {
            Ok(digest) => Ok(digest.into_bytes()),
            Err(BcryptError::CostNotAllowed(cost)) => Err(TargetError::CostOutOfRange {
                cost,
                min: COST_MIN,
                max: COST_MAX,
            }),
            Err(err) => Err(TargetError::Backend(err.to_string())),
        }
    }
}
