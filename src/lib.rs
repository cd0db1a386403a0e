//! Maximum-excursion analysis of Ulam (Collatz) trajectories.
//!
//! The Ulam function maps a positive integer to `a / 2` when `a` is even and
//! to `3a + 1` when `a` is odd. Iterating it from any starting value is
//! assumed to reach 1. This crate computes the largest term visited along the
//! way ([`sequence_max`]) and searches ranges of starting values for runs of
//! neighbors whose trajectories peak at the same maximum ([`find_twins`],
//! [`find_multiples`]).
//!
//! All arithmetic is explicitly 32-bit: an odd term at or above
//! [`OVERFLOW_THRESHOLD`] fails with [`UlamError::Overflow`] instead of
//! wrapping. The [`sentinel`] module exposes the legacy interface in which
//! every failure collapses to `-1`.

pub mod error;
pub mod search;
pub mod sentinel;
pub mod sequence;

pub use error::UlamError;
pub use search::{find_multiples, find_twins};
pub use sequence::{next_value, sequence, sequence_max, Sequence, OVERFLOW_THRESHOLD};
