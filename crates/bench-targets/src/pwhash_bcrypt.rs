//! Comparison target wrapping the `pwhash` crate's bcrypt module.
//!
//! An independent bcrypt codebase from the primary target. Registered but
//! dormant by default; activate it via the trial configuration's target
//! override.

use pwhash::bcrypt::{self, BcryptSetup};
use pwhash::error::Error as PwhashError;

use bench_core::{HashTarget, TargetError};

/// Supported cost range of the pwhash bcrypt implementation.
const COST_MIN: u32 = 4;
const COST_MAX: u32 = 31;

/// The `pwhash` crate's bcrypt as a comparison target.
#[derive(Default)]
pub struct PwhashBcrypt;

impl PwhashBcrypt {
    pub const NAME: &'static str = "pwhash";
}

impl HashTarget for PwhashBcrypt {
    fn hash(&self, cost: u32, password: &[u8]) -> Result<Vec<u8>, TargetError> {
        let setup = BcryptSetup {
            cost: Some(cost),
            ..Default::default()
        };
        match bcrypt::hash_with(setup, password) {
            Ok(digest) => Ok(digest.into_bytes()),
            Err(PwhashError::InvalidRounds) => Err(TargetError::CostOutOfRange {
                cost,
                min: COST_MIN,
                max: COST_MAX,
            }),
            Err(err) => Err(TargetError::Backend(err.to_string())),
        }
    }
}
