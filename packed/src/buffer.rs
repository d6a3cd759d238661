//! Right-aligned, growable byte storage for packed digits.

use crate::bitfield;
use crate::error::PackedError;

/// Capacity of a freshly allocated buffer, in bytes.
pub const INITIAL_CAPACITY: usize = 8;

/// Owned byte buffer addressed from its last byte.
///
/// Element 0 lives at the right end, so growing the buffer prepends zero bytes
/// on the left and leaves every existing element at the same bit index.
#[derive(Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    bytes: Vec<u8>,
}

/// Bytes needed to hold `count` elements of `elem_bits` bits each.
///
/// A bit total that does not fit a `usize` can never be allocated and is
/// reported as [`PackedError::AllocationFailure`].
#[inline]
pub fn bytes_for(elem_bits: usize, count: usize) -> Result<usize, PackedError> {
    elem_bits
        .checked_mul(count)
        .map(|bits| bits.div_ceil(8))
        .ok_or(PackedError::AllocationFailure {
            requested: usize::MAX,
        })
}

/// Double `from` until it reaches `min_bytes`.
fn doubled_capacity(from: usize, min_bytes: usize) -> Result<usize, PackedError> {
    let mut capacity = from;
    while capacity < min_bytes {
        capacity = capacity
            .checked_mul(2)
            .ok_or(PackedError::AllocationFailure {
                requested: min_bytes,
            })?;
    }
    Ok(capacity)
}

impl DigitBuffer {
    /// Allocate a zeroed buffer of at least `min_bytes`, doubling from
    /// [`INITIAL_CAPACITY`].
    pub fn with_min_capacity(min_bytes: usize) -> Result<Self, PackedError> {
        let capacity = doubled_capacity(INITIAL_CAPACITY, min_bytes)?;
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| PackedError::AllocationFailure {
                requested: capacity,
            })?;
        bytes.resize(capacity, 0);
        Ok(Self { bytes })
    }

    /// Allocated length in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Grow until at least `min_bytes` are allocated.
    ///
    /// Capacity doubles each step. The replacement buffer is fully allocated
    /// before the old one is touched, so on failure `self` is unchanged.
    pub fn ensure_capacity(&mut self, min_bytes: usize) -> Result<(), PackedError> {
        let old = self.bytes.len();
        if old >= min_bytes {
            return Ok(());
        }
        let capacity = doubled_capacity(old.max(1), min_bytes)?;

        let mut grown = Vec::new();
        grown
            .try_reserve_exact(capacity)
            .map_err(|_| PackedError::AllocationFailure {
                requested: capacity,
            })?;
        grown.resize(capacity - old, 0);
        grown.extend_from_slice(&self.bytes);

        log::debug!("digit buffer grown from {old} to {capacity} bytes");
        self.bytes = grown;
        Ok(())
    }

    /// Read element `index` of width `elem_bits`.
    #[inline]
    pub fn get(&self, elem_bits: usize, index: usize) -> u64 {
        bitfield::get_bits_span(&self.bytes, elem_bits, index)
    }

    /// Write element `index` of width `elem_bits`.
    #[inline]
    pub fn set(&mut self, elem_bits: usize, index: usize, value: u64) {
        bitfield::set_bits_span(&mut self.bytes, elem_bits, index, value)
    }

    /// Number of whole elements of width `elem_bits` that fit.
    #[inline]
    pub fn slots(&self, elem_bits: usize) -> usize {
        self.bytes.len().saturating_mul(8) / elem_bits
    }
}
