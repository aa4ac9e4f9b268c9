//! Iterative evaluation of the Fibonacci sequence.
//!
//! Positions are numbered from 1: position 1 holds 0, position 2 holds 1,
//! and every later position holds the sum of the two preceding ones, so the
//! sequence reads 0, 1, 1, 2, 3, 5, 8, ... and position 7 evaluates to 8.
//!
//! The walk keeps a `(prev, current)` pair and performs exactly `index - 2`
//! additions, one per position from 3 up to and including the requested one.

use num_traits::{CheckedAdd, One, Zero};

/// The largest 1-based index whose value fits in a `u64`.
///
/// The value at this position is `12_200_160_415_121_876_738`; one position
/// further the checked walk reports [`SequenceError::ValueOverflow`].
pub const MAX_INDEX: u64 = 94;

/// Errors that can occur while evaluating the sequence
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid index {0}: sequence positions are numbered from 1")]
    InvalidIndex(i64),

    #[error("Value at index {index} does not fit in the chosen representation")]
    ValueOverflow { index: u64 },
}

/// How the walk treats values that outgrow the 64-bit representation.
///
/// [`Fail`](Self::Fail) is the default: additions are checked and overflow
/// is reported as an error rather than silently losing precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Checked additions; overflow is a [`SequenceError::ValueOverflow`].
    #[default]
    Fail,
    /// Clamp at `u64::MAX` once a value no longer fits.
    Saturate,
    /// Reduce modulo 2^64.
    Wrap,
}

impl OverflowPolicy {
    /// Evaluates the sequence at `index` under this policy.
    pub fn nth(self, index: u64) -> Result<u64, SequenceError> {
        match self {
            Self::Fail => nth(index),
            Self::Saturate => saturating_nth(index),
            Self::Wrap => wrapping_nth(index),
        }
    }
}

/// Validates a signed value as a 1-based sequence index.
///
/// Inputs arrive from the command line as `i64`; anything below 1 is
/// rejected here so that a negative request fails exactly like index 0.
pub const fn index_from_i64(n: i64) -> Result<u64, SequenceError> {
    if n < 1 {
        return Err(SequenceError::InvalidIndex(n));
    }
    Ok(n as u64)
}

/// Computes the value at a 1-based position of the Fibonacci sequence.
///
/// Base cases are `nth(1) = 0` and `nth(2) = 1`; for later positions the
/// walk accumulates `next = prev + current`, shifting `prev <- current` and
/// `current <- next` once per position from 3 to `index`.
///
/// Additions are checked: the result is a `u64` and the walk fails once a
/// value no longer fits (see [`MAX_INDEX`]).
///
/// ## Errors
///
/// - [`SequenceError::InvalidIndex`] if `index` is 0
/// - [`SequenceError::ValueOverflow`] if the value exceeds `u64::MAX`
pub fn nth(index: u64) -> Result<u64, SequenceError> {
    nth_in::<u64>(index)
}

/// Checked walk, generic over the numeric representation.
///
/// [`nth`] instantiates this with `u64`; a wider type such as `u128` pushes
/// [`SequenceError::ValueOverflow`] further out without changing the
/// recurrence.
pub fn nth_in<T>(index: u64) -> Result<T, SequenceError>
where
    T: Zero + One + CheckedAdd,
{
    if index == 0 {
        return Err(SequenceError::InvalidIndex(0));
    }
    if index == 1 {
        return Ok(T::zero());
    }

    let mut prev = T::zero();
    let mut current = T::one();
    for position in 3..=index {
        let next = prev
            .checked_add(&current)
            .ok_or(SequenceError::ValueOverflow { index: position })?;
        prev = std::mem::replace(&mut current, next);
    }

    Ok(current)
}

/// Like [`nth`] but clamps at `u64::MAX` instead of failing on overflow.
///
/// Once the walk saturates, every later position also evaluates to
/// `u64::MAX`.
pub fn saturating_nth(index: u64) -> Result<u64, SequenceError> {
    walk_with(index, u64::saturating_add)
}

/// Like [`nth`] but reduces modulo 2^64 instead of failing on overflow.
pub fn wrapping_nth(index: u64) -> Result<u64, SequenceError> {
    walk_with(index, u64::wrapping_add)
}

/// Iterative walk shared by the lossy policies.
fn walk_with(index: u64, add: fn(u64, u64) -> u64) -> Result<u64, SequenceError> {
    if index == 0 {
        return Err(SequenceError::InvalidIndex(0));
    }
    if index == 1 {
        return Ok(0);
    }

    let mut prev = 0u64;
    let mut current = 1u64;
    for _ in 3..=index {
        let next = add(prev, current);
        prev = current;
        current = next;
    }

    Ok(current)
}

#[cfg(test)]
#[path = "./sequence_tests.rs"]
mod sequence_tests;
