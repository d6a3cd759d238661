//! Bit range access over a byte buffer.
//!
//! Bits are numbered from the least significant end: bit 0 is the lowest bit
//! of the *last* byte, bit 8 the lowest bit of the byte before it, and so on.
//! A range `[start, end)` may cross any number of byte boundaries but spans at
//! most 64 bits, so it always fits a `u64`.
//!
//! ```
//! use packed::bitfield::{get_bits, set_bits};
//!
//! // 11111111 01000011 00001000
//! let mut buf = [255u8, 67, 8];
//! assert_eq!(get_bits(&buf, 3, 20), 0b1_1110_1000_0110_0001);
//!
//! set_bits(&mut buf, 8, 10, 0b01);
//! assert_eq!(buf, [255, 65, 8]);
//! ```

/// Index of the byte that holds bit `bit` in a buffer of `len` bytes.
#[inline(always)]
fn byte_index(len: usize, bit: usize) -> usize {
    len - bit / 8 - 1
}

/// Mask with the low `n` bits set, for `n <= 64`.
#[inline(always)]
const fn low_mask(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

#[inline(always)]
fn check_range(len: usize, start: usize, end: usize) {
    assert!(start < end, "empty bit range {start}..{end}");
    assert!(end - start <= 64, "bit range {start}..{end} exceeds 64 bits");
    assert!(
        end <= len * 8,
        "bit range {start}..{end} exceeds buffer of {len} bytes"
    );
}

/// Read bits `[start, end)` of `data` as an unsigned integer.
///
/// # Panics
///
/// Panics if the range is empty, wider than 64 bits, or runs past the end of
/// `data`.
pub fn get_bits(data: &[u8], start: usize, end: usize) -> u64 {
    let len = data.len();
    check_range(len, start, end);

    let mut bit = start;
    let mut ret = 0u64;

    // Every byte strictly below the one holding `end`.
    while bit / 8 != end / 8 {
        let mut chunk = data[byte_index(len, bit)] as u64;
        // Two shifts: drop bits below `bit`, then move to the output position.
        chunk >>= bit % 8;
        chunk <<= bit - start;
        ret |= chunk;
        bit += 8 - bit % 8;
    }

    // Byte-aligned end: nothing left in the final byte.
    if bit == end {
        return ret;
    }

    let mask = low_mask(end % 8) & (u64::MAX << (bit % 8));
    let mut chunk = data[byte_index(len, bit)] as u64 & mask;
    chunk >>= bit % 8;
    chunk <<= bit - start;
    ret | chunk
}

/// Overwrite bits `[start, end)` of `data` with `value`.
///
/// Bits outside the range are preserved.
///
/// # Panics
///
/// Panics on the same range violations as [`get_bits`], and if `value` does
/// not fit in `end - start` bits.
pub fn set_bits(data: &mut [u8], start: usize, end: usize, value: u64) {
    let len = data.len();
    check_range(len, start, end);
    assert!(
        value & low_mask(end - start) == value,
        "value {value:#x} does not fit in {} bits",
        end - start
    );

    let mut bit = start;

    while bit / 8 != end / 8 {
        let idx = byte_index(len, bit);
        let keep_right = low_mask(bit % 8) as u8;
        let incoming = ((value >> (bit - start)) << (bit % 8)) as u8;
        data[idx] = (data[idx] & keep_right) | incoming;
        bit += 8 - bit % 8;
    }

    if bit == end {
        return;
    }

    let idx = byte_index(len, bit);
    let keep_right = low_mask(bit % 8) as u8;
    let keep_left = !(low_mask(end % 8) as u8);
    let incoming = ((value >> (bit - start)) << (bit % 8)) as u8;
    data[idx] = (data[idx] & (keep_left | keep_right)) | incoming;
}

/// Read element `index` of a packed array of `elem_bits`-wide elements.
#[inline]
pub fn get_bits_span(data: &[u8], elem_bits: usize, index: usize) -> u64 {
    get_bits(data, elem_bits * index, elem_bits * (index + 1))
}

/// Write element `index` of a packed array of `elem_bits`-wide elements.
#[inline]
pub fn set_bits_span(data: &mut [u8], elem_bits: usize, index: usize, value: u64) {
    set_bits(data, elem_bits * index, elem_bits * (index + 1), value)
}
