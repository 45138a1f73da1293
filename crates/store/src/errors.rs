//! Error handling for the cache store boundary
//!
//! Store errors carry a [`RecoveryHint`] so callers can decide whether a
//! failure is worth retrying, should be treated as a miss, or needs a
//! configuration change.

mod conversions;
mod display;
mod recovery;
mod types;

pub use types::*;
