//! Downward scans for neighboring starting values whose trajectories peak at
//! the same maximum.
//!
//! Both scans walk from `limit` toward 1 and reuse the previously computed
//! maximum as the right-hand side of the next comparison, so each index costs
//! exactly one [`sequence_max`] evaluation. They stop at 1 rather than 0:
//! `sequence_max(0)` is undefined, so no pair or run containing 0 can match.

use crate::error::UlamError;
use crate::sequence::sequence_max;

/// Finds the twin pair nearest `limit`: adjacent starting values `a0` and
/// `a0 + 1` within `[0, limit]` with equal sequence maxima.
///
/// Returns the smaller index of the first such pair encountered scanning
/// downward, or `Ok(None)` when the range holds no twins. Fails with
/// `InvalidInput` for `limit < 1`; an overflow in any trajectory aborts the
/// scan.
pub fn find_twins(limit: i32) -> Result<Option<i32>, UlamError> {
    if limit < 1 {
        return Err(UlamError::InvalidInput(limit));
    }

    let mut right = sequence_max(limit)?;
    for a0 in (1..limit).rev() {
        let left = sequence_max(a0)?;
        if left == right {
            return Ok(Some(a0));
        }
        right = left;
    }
    Ok(None)
}

/// Finds the run of `number` consecutive starting values nearest `limit`
/// (within `[0, limit]`) that all share one sequence maximum.
///
/// The scan keeps a count of consecutive equal maxima, resetting it to 1
/// whenever two neighbors differ, and returns as soon as the count reaches
/// `number`. The returned index is the smallest member of that length-
/// `number` run; a longer equal-maximum run extending further down is not
/// explored. Fails with `InvalidInput` when `number < 2` or `limit < number`;
/// an overflow in any trajectory aborts the scan.
pub fn find_multiples(limit: i32, number: i32) -> Result<Option<i32>, UlamError> {
    if number < 2 {
        return Err(UlamError::InvalidInput(number));
    }
    if limit < number {
        return Err(UlamError::InvalidInput(limit));
    }

    let mut right = sequence_max(limit)?;
    let mut count = 1;
    for a0 in (1..limit).rev() {
        let left = sequence_max(a0)?;
        if left == right {
            count += 1;
        } else {
            right = left;
            count = 1;
        }
        if count == number {
            return Ok(Some(a0));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::OVERFLOW_THRESHOLD;

    #[test]
    fn twins_nearest_limit() {
        // 5 and 6 both peak at 16.
        assert_eq!(find_twins(6), Ok(Some(5)));
    }

    #[test]
    fn twins_absent_below_six() {
        assert_eq!(find_twins(5), Ok(None));
        assert_eq!(find_twins(1), Ok(None));
    }

    #[test]
    fn twins_rejects_non_positive_limit() {
        assert_eq!(find_twins(0), Err(UlamError::InvalidInput(0)));
        assert_eq!(find_twins(-3), Err(UlamError::InvalidInput(-3)));
    }

    #[test]
    fn multiples_literals() {
        assert_eq!(find_multiples(10, 2), Ok(Some(5)));
        assert_eq!(find_multiples(1000, 2), Ok(Some(982)));
        assert_eq!(find_multiples(1000, 3), Ok(Some(972)));
        assert_eq!(find_multiples(391, 6), Ok(Some(386)));
    }

    #[test]
    fn multiples_run_must_fit_entirely() {
        assert_eq!(find_multiples(108, 3), Ok(None));
        assert_eq!(find_multiples(109, 4), Ok(None));
        assert_eq!(find_multiples(5, 2), Ok(None));
    }

    #[test]
    fn multiples_window_shifts_with_limit() {
        // 107..=111 share one maximum; the run of 4 nearest the limit wins.
        assert_eq!(find_multiples(110, 4), Ok(Some(107)));
        assert_eq!(find_multiples(111, 4), Ok(Some(108)));
    }

    #[test]
    fn multiples_rejects_bad_parameters() {
        assert_eq!(find_multiples(10, 0), Err(UlamError::InvalidInput(0)));
        assert_eq!(find_multiples(10, 1), Err(UlamError::InvalidInput(1)));
        assert_eq!(find_multiples(10, -2), Err(UlamError::InvalidInput(-2)));
        assert_eq!(find_multiples(1, 2), Err(UlamError::InvalidInput(1)));
        assert_eq!(find_multiples(0, 2), Err(UlamError::InvalidInput(0)));
    }

    #[test]
    fn scans_abort_on_overflow() {
        // The limit itself overflows on its first odd step, so both scans
        // fail before comparing anything.
        assert_eq!(
            find_twins(OVERFLOW_THRESHOLD),
            Err(UlamError::Overflow(OVERFLOW_THRESHOLD))
        );
        assert_eq!(
            find_multiples(OVERFLOW_THRESHOLD, 2),
            Err(UlamError::Overflow(OVERFLOW_THRESHOLD))
        );
    }
}
