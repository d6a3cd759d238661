use thiserror::Error;

use crate::uint::MAX_BASE;

/// Errors from constructing or mutating a [`PackedBigUint`](crate::PackedBigUint).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PackedError {
    /// The base is outside `[2, MAX_BASE]`.
    #[error("invalid base {base}: required 2 <= base <= {}", MAX_BASE)]
    InvalidBase { base: u64 },
    /// The operands of an addition use different bases.
    #[error("cannot add a base-{right} value to a base-{left} value")]
    BaseMismatch { left: u64, right: u64 },
    /// Growing the digit buffer could not obtain memory.
    #[error("could not allocate {requested} bytes for the digit buffer")]
    AllocationFailure { requested: usize },
    /// A digit supplied to `from_digits` does not fit the base.
    #[error("digit {value} at index {index} is out of range for base {base}")]
    InvalidDigit { index: usize, value: u64, base: u64 },
}
