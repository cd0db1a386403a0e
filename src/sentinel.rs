//! Legacy interface in which every failure collapses to a reserved sentinel.
//!
//! The original routines had no structured error channel: invalid input,
//! overflow and "nothing found" all come back as `-1`. This module is that
//! compatibility boundary over the typed API; callers who can should use
//! [`crate::sequence`] and [`crate::search`] directly.

use crate::search::{find_multiples, find_twins};
use crate::sequence::{next_value, sequence_max};

/// The reserved failure value. Distinct from every valid output, since all
/// valid outputs are positive.
pub const SENTINEL: i32 = -1;

/// [`next_value`] with failures collapsed to [`SENTINEL`].
pub fn ulam(a: i32) -> i32 {
    next_value(a).unwrap_or(SENTINEL)
}

/// [`sequence_max`] with failures collapsed to [`SENTINEL`].
pub fn ulam_max(a0: i32) -> i32 {
    sequence_max(a0).unwrap_or(SENTINEL)
}

/// [`find_twins`] with failures and "no pair" collapsed to [`SENTINEL`].
pub fn ulam_twins(limit: i32) -> i32 {
    match find_twins(limit) {
        Ok(Some(a0)) => a0,
        Ok(None) | Err(_) => SENTINEL,
    }
}

/// [`find_multiples`] with failures and "no run" collapsed to [`SENTINEL`].
pub fn ulam_multiples(limit: i32, number: i32) -> i32 {
    match find_multiples(limit, number) {
        Ok(Some(a0)) => a0,
        Ok(None) | Err(_) => SENTINEL,
    }
}
