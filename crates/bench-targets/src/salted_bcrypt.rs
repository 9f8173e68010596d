//! Comparison target wrapping the `bcrypt-no-getrandom` crate.
//!
//! This codebase leaves salt generation to the caller, so the wrapper
//! draws a fresh 16-byte salt per invocation; the salt draw is part of
//! what this target's timing includes. Dormant by default.

use bcrypt_no_getrandom::{hash_with_salt, BcryptError, Version};
use rand::Rng;

use bench_core::{HashTarget, TargetError};

/// Cost range accepted by the wrapped implementation.
const COST_MIN: u32 = 4;
const COST_MAX: u32 = 31;

/// The `bcrypt-no-getrandom` crate as a comparison target.
#[derive(Default)]
pub struct SaltedBcrypt;

impl SaltedBcrypt {
    pub const NAME: &'static str = "bcrypt-no-getrandom";
}

impl HashTarget for SaltedBcrypt {
    fn hash(&self, cost: u32, password: &[u8]) -> Result<Vec<u8>, TargetError> {
        let salt: [u8; 16] = rand::thread_rng().gen();
        match hash_with_salt(password, cost, salt) {
            Ok(parts) => Ok(parts.format_for_version(Version::TwoB).into_bytes()),
            Err(BcryptError::CostNotAllowed(cost)) => Err(TargetError::CostOutOfRange {
                cost,
                min: COST_MIN,
                max: COST_MAX,
            }),
            Err(err) => Err(TargetError::Backend(err.to_string())),
        }
    }
}
