//! Arbitrary-base unsigned integers with bit-packed digits.
//!
//! Each digit takes the fewest bits that hold `base - 1`, and digits sit back
//! to back in a [`DigitBuffer`] with no padding. Digit 0 is the least
//! significant and occupies the lowest bits of the buffer's last byte.

use crate::buffer::{bytes_for, DigitBuffer};
use crate::error::PackedError;

/// Largest supported base.
///
/// Two digits plus a carry must fit a `u64` accumulator during addition.
pub const MAX_BASE: u64 = (1 << 63) - 1;

/// Number of bits needed to represent `value`. Zero takes one bit.
///
/// ```
/// use packed::min_bits_needed;
///
/// assert_eq!(min_bits_needed(0), 1);
/// assert_eq!(min_bits_needed(6), 3);
/// assert_eq!(min_bits_needed(255), 8);
/// assert_eq!(min_bits_needed(u64::MAX), 64);
/// ```
#[inline]
pub const fn min_bits_needed(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        u64::BITS - value.leading_zeros()
    }
}

/// Unsigned integer stored as packed base-`base` digits.
#[derive(Clone)]
pub struct PackedBigUint {
    buffer: DigitBuffer,
    base: u64,
    bpd: usize,
    digit_count: usize,
}

// ============================================================================
// Construction
// ============================================================================

impl PackedBigUint {
    /// Create a value equal to `initial`, stored in `base`.
    ///
    /// `initial` may be any `u64`; values at or above `base` spread over as
    /// many digits as needed.
    ///
    /// ```
    /// use packed::PackedBigUint;
    ///
    /// let x = PackedBigUint::new(100, 7).unwrap(); // 2*7^2 + 0*7 + 2
    /// assert_eq!(x.bits_per_digit(), 3);
    /// assert_eq!(x.digits().collect::<Vec<_>>(), vec![2, 0, 2]);
    /// ```
    pub fn new(initial: u64, base: u64) -> Result<Self, PackedError> {
        let mut ret = Self::zero(base)?;
        ret.add_scalar(initial)?;
        Ok(ret)
    }

    /// Create the value 0 in `base`.
    pub fn zero(base: u64) -> Result<Self, PackedError> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(PackedError::InvalidBase { base });
        }
        let bpd = min_bits_needed(base - 1) as usize;
        // Room for one digit plus a carry-out slot.
        let buffer = DigitBuffer::with_min_capacity(bytes_for(bpd, 2)?)?;
        Ok(Self {
            buffer,
            base,
            bpd,
            digit_count: 1,
        })
    }

    /// Build from digits in least-significant-first order.
    ///
    /// ```
    /// use packed::PackedBigUint;
    ///
    /// let x = PackedBigUint::from_digits(&[3, 0, 5], 7).unwrap();
    /// assert_eq!(x.to_string(), "5x7^2 + 0x7^1 + 3x7^0");
    /// ```
    pub fn from_digits(digits: &[u64], base: u64) -> Result<Self, PackedError> {
        let mut ret = Self::zero(base)?;
        if let Some((index, &value)) = digits.iter().enumerate().find(|&(_, &d)| d >= base) {
            return Err(PackedError::InvalidDigit { index, value, base });
        }
        let significant = digits.iter().rposition(|&d| d != 0).map_or(1, |p| p + 1);
        ret.reserve_digits(significant, 1)?;
        for (i, &d) in digits[..significant.min(digits.len())].iter().enumerate() {
            ret.buffer.set(ret.bpd, i, d);
        }
        ret.digit_count = significant;
        Ok(ret)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Width of one digit in bits.
    #[inline]
    pub fn bits_per_digit(&self) -> usize {
        self.bpd
    }

    /// Number of significant digits; 1 for zero.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Allocated size of the digit buffer in bytes.
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.buffer.capacity()
    }

    /// The packed digit bytes, digit 0 at the end.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digit_count == 1 && self.digit(0) == 0
    }

    /// Digit at `index`, least significant first.
    ///
    /// Positions at or beyond [`digit_count`](Self::digit_count) read as 0.
    #[inline]
    pub fn digit(&self, index: usize) -> u64 {
        if index >= self.digit_count {
            return 0;
        }
        self.buffer.get(self.bpd, index)
    }

    /// Significant digits, least significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u64> + ExactSizeIterator + '_ {
        (0..self.digit_count).map(move |i| self.buffer.get(self.bpd, i))
    }

    /// Overwrite the digit at `index`.
    ///
    /// Writing past the current top grows the value; writing 0 into the top
    /// digit shrinks [`digit_count`](Self::digit_count) to the next non-zero
    /// digit.
    ///
    /// # Panics
    ///
    /// Panics if `value >= base`.
    pub fn set_digit(&mut self, index: usize, value: u64) -> Result<(), PackedError> {
        assert!(
            value < self.base,
            "digit {value} out of range for base {}",
            self.base
        );
        if index >= self.digit_count {
            if value == 0 {
                return Ok(());
            }
            self.reserve_digits(index, 2)?;
            self.buffer.set(self.bpd, index, value);
            self.digit_count = index + 1;
            return Ok(());
        }

        self.buffer.set(self.bpd, index, value);
        if index + 1 == self.digit_count {
            self.normalize();
        }
        Ok(())
    }

    /// Make room for `count + headroom` digits without changing the value.
    ///
    /// A digit count too large to address fails with
    /// [`PackedError::AllocationFailure`] before anything is written.
    fn reserve_digits(&mut self, count: usize, headroom: usize) -> Result<(), PackedError> {
        let total = count
            .checked_add(headroom)
            .ok_or(PackedError::AllocationFailure {
                requested: usize::MAX,
            })?;
        let bytes = bytes_for(self.bpd, total)?;
        if self.buffer.slots(self.bpd) >= total {
            return Ok(());
        }
        self.buffer.ensure_capacity(bytes)
    }

    /// Drop leading zero digits, keeping at least one.
    fn normalize(&mut self) {
        while self.digit_count > 1 && self.buffer.get(self.bpd, self.digit_count - 1) == 0 {
            self.digit_count -= 1;
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// In-place addition of a same-base value.
    ///
    /// On error `self` is left unchanged.
    ///
    /// ```
    /// use packed::PackedBigUint;
    ///
    /// let mut a = PackedBigUint::new(10, 10).unwrap();
    /// let b = PackedBigUint::new(10, 10).unwrap();
    /// a.add_assign(&b).unwrap();
    /// assert_eq!(a.digits().collect::<Vec<_>>(), vec![0, 2]);
    /// ```
    pub fn add_assign(&mut self, right: &Self) -> Result<(), PackedError> {
        if self.base != right.base {
            return Err(PackedError::BaseMismatch {
                left: self.base,
                right: right.base,
            });
        }

        let max_digits = self.digit_count.max(right.digit_count);
        // One slot for the carry-out and one more so the result keeps headroom.
        self.reserve_digits(max_digits, 2)?;

        let mut carry = 0u64;
        for i in 0..max_digits {
            // At most 2 * (base - 1) + 1, which fits below 2^64 for any valid base.
            let mut sum = carry + self.digit(i) + right.digit(i);
            if sum >= self.base {
                sum -= self.base;
                carry = 1;
            } else {
                carry = 0;
            }
            self.buffer.set(self.bpd, i, sum);
        }

        if carry == 1 {
            log::trace!("carry into new digit {max_digits} (base {})", self.base);
            self.buffer.set(self.bpd, max_digits, 1);
            self.digit_count = max_digits + 1;
        } else {
            self.digit_count = max_digits;
        }
        Ok(())
    }

    /// In-place addition of a machine word.
    ///
    /// ```
    /// use packed::PackedBigUint;
    ///
    /// let mut x = PackedBigUint::new(6, 7).unwrap();
    /// x.add_scalar(1).unwrap();
    /// assert_eq!(x.digits().collect::<Vec<_>>(), vec![0, 1]);
    /// ```
    pub fn add_scalar(&mut self, right: u64) -> Result<(), PackedError> {
        if right == 0 {
            return Ok(());
        }

        // A u64 spans at most 64 digits (base 2); the carry adds one more.
        let needed = self.digit_count.max(scalar_digits(right, self.base));
        self.reserve_digits(needed, 1)?;

        let base = self.base as u128;
        let mut carry = right as u128;
        let mut i = 0;
        while carry != 0 {
            let sum = self.digit(i) as u128 + carry;
            self.buffer.set(self.bpd, i, (sum % base) as u64);
            carry = sum / base;
            i += 1;
            if i > self.digit_count {
                self.digit_count = i;
            }
        }
        self.normalize();
        Ok(())
    }
}

/// Number of base-`base` digits in `value`.
fn scalar_digits(mut value: u64, base: u64) -> usize {
    let mut count = 1;
    while value >= base {
        value /= base;
        count += 1;
    }
    count
}

// ============================================================================
// Trait impls
// ============================================================================

impl PartialEq for PackedBigUint {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.digit_count == other.digit_count
            && self.digits().eq(other.digits())
    }
}

impl Eq for PackedBigUint {}
