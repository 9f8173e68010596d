//! # bcrypt-bench Test Suite
//!
//! Unified test crate for the harness:
//!
//! ```text
//! tests/src/
//! ├── doubles.rs      # Controlled targets and input sources
//! └── properties.rs   # End-to-end measurement and failure properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bench-harness-tests
//! ```


#[cfg(test)]
mod properties;
