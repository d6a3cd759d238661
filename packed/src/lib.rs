//! Arbitrary-base unsigned integers with bit-packed digits.
//!
//! A [`PackedBigUint`] stores base-`b` digits in the fewest bits that hold
//! `b - 1`, back to back in a byte buffer. Base 10 takes 4 bits per digit,
//! base 7 takes 3, and base 256 degenerates to one byte per digit.
//!
//! ```
//! use packed::PackedBigUint;
//!
//! let mut x = PackedBigUint::new(999, 10)?;
//! x.add_assign(&PackedBigUint::new(1, 10)?)?;
//! assert_eq!(x.to_string(), "1x10^3 + 0x10^2 + 0x10^1 + 0x10^0");
//! # Ok::<(), packed::PackedError>(())
//! ```

pub mod bitfield;
pub mod buffer;
pub mod error;
pub mod format;
pub mod uint;

#[cfg(test)]
mod uint_tests;

pub use error::PackedError;
pub use uint::{min_bits_needed, PackedBigUint, MAX_BASE};
