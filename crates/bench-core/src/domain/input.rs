//! Password-shaped input generation.
//!
//! Each measured invocation hashes a freshly drawn password so no
//! implementation can profit from caching a fixed input. The generator is
//! deliberately non-cryptographic: unpredictability across invocations is
//! all that matters, and generation must stay cheap enough to sit next to
//! the timed window without ever being inside it.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::ports::InputSource;

/// Number of raw random bytes per password before printable encoding.
pub const RAW_PASSWORD_BYTES: usize = 36;

/// Production input source: fixed-length random bytes, hex-encoded so the
/// password stays printable-safe for implementations that treat input as
/// text.
pub struct PasswordGenerator {
    rng: StdRng,
    raw_len: usize,
}

impl PasswordGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            raw_len: RAW_PASSWORD_BYTES,
        }
    }

    /// Create a deterministically seeded generator, for reproducible runs
    /// and tests. Successive passwords still differ from each other.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            raw_len: RAW_PASSWORD_BYTES,
        }
    }

    /// Override the raw byte length (the emitted password is twice as long
    /// after hex encoding).
    pub fn with_raw_len(mut self, raw_len: usize) -> Self {
        self.raw_len = raw_len;
        self
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for PasswordGenerator {
    fn next_password(&mut self) -> Vec<u8> {
        let mut raw = vec![0u8; self.raw_len];
        self.rng.fill_bytes(&mut raw);
        hex::encode(raw).into_bytes()
    }
}
