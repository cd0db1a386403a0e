use core::fmt::Debug;
use thiserror::Error;

/// Failure modes of a trajectory computation.
///
/// Any error anywhere in a computation aborts the whole call; no routine ever
/// substitutes a partial result for a failed one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UlamError {
    #[error("input {0} is outside the function's domain")]
    InvalidInput(i32),
    #[error("3 * {0} + 1 exceeds i32::MAX")]
    Overflow(i32),
}
