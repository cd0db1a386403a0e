use crate::error::UlamError;

/// Smallest value whose odd step `3a + 1` no longer fits in an `i32`.
///
/// Any odd term at or above this bound fails with [`UlamError::Overflow`]
/// rather than wrapping. The width is deliberately fixed at 32 bits.
pub const OVERFLOW_THRESHOLD: i32 = i32::MAX / 3 + 1;

/// Computes the next term of the Ulam sequence: `a / 2` for even `a`,
/// `3a + 1` for odd `a`.
///
/// Fails with `InvalidInput` for `a < 1` and with `Overflow` when the odd
/// step would exceed `i32::MAX`.
pub fn next_value(a: i32) -> Result<i32, UlamError> {
    if a < 1 {
        return Err(UlamError::InvalidInput(a));
    }
    if a % 2 == 0 {
        Ok(a / 2)
    } else {
        a.checked_mul(3)
            .and_then(|tripled| tripled.checked_add(1))
            .ok_or_else(|| {
                tracing::warn!(term = a, "odd Ulam step overflows i32");
                UlamError::Overflow(a)
            })
    }
}

/// Iterator over a full Ulam trajectory, starting at `a0` itself and ending
/// with the term 1 (or with the first error, after which it is fused).
pub fn sequence(a0: i32) -> Sequence {
    let first = if a0 < 1 {
        Err(UlamError::InvalidInput(a0))
    } else {
        Ok(a0)
    };
    Sequence { next: Some(first) }
}

/// See [`sequence`].
#[derive(Debug, Clone)]
pub struct Sequence {
    next: Option<Result<i32, UlamError>>,
}

impl Iterator for Sequence {
    type Item = Result<i32, UlamError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next.take()?;
        self.next = match item {
            Ok(1) | Err(_) => None,
            Ok(a) => Some(next_value(a)),
        };
        Some(item)
    }
}

/// Returns the largest term visited while iterating the Ulam sequence from
/// `a0` down to 1, `a0` included.
///
/// Fails with `InvalidInput` for `a0 < 1`. An overflow anywhere along the
/// trajectory aborts the whole call; the maximum accumulated so far is
/// discarded.
pub fn sequence_max(a0: i32) -> Result<i32, UlamError> {
    let mut max = i32::MIN;
    for term in sequence(a0) {
        max = max.max(term?);
    }
    Ok(max)
}
