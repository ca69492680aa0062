//! Core utilities shared by every system.
//!
//! - utils/safety.rs - `fast!` indexing macro (checked in debug, unchecked in release)
//! - utils/log.rs    - console logging for the JS host
//! - utils/random.rs - deterministic xorshift32 PRNG

#[macro_use]
pub mod utils;
