//! Power-of-base rendering.

use std::fmt::{self, Write};

use crate::uint::PackedBigUint;

/// Number of decimal digits in `n`; 1 for zero.
///
/// ```
/// use packed::format::min_decimal_digits;
///
/// assert_eq!(min_decimal_digits(0), 1);
/// assert_eq!(min_decimal_digits(9), 1);
/// assert_eq!(min_decimal_digits(10), 2);
/// assert_eq!(min_decimal_digits(10234918), 8);
/// ```
pub fn min_decimal_digits(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Upper bound on the rendered length, used to size the output once.
fn power_string_len(x: &PackedBigUint) -> usize {
    let digit = min_decimal_digits(x.base() - 1);
    let base = min_decimal_digits(x.base());
    let exp = min_decimal_digits(x.digit_count() as u64 - 1);
    // "x", "^" and the " + " separator.
    let unit = digit + base + exp + 5;
    unit * x.digit_count()
}

impl PackedBigUint {
    /// Render as a sum of digit-times-power terms, most significant first.
    ///
    /// ```
    /// use packed::PackedBigUint;
    ///
    /// let x = PackedBigUint::new(100, 7).unwrap();
    /// assert_eq!(x.to_power_string(), "2x7^2 + 0x7^1 + 2x7^0");
    /// ```
    pub fn to_power_string(&self) -> String {
        let mut out = String::with_capacity(power_string_len(self));
        write_power(self, &mut out).expect("writing to a String cannot fail");
        out
    }
}

fn write_power<W: Write>(x: &PackedBigUint, out: &mut W) -> fmt::Result {
    for (exp, digit) in x.digits().enumerate().rev() {
        write!(out, "{digit}x{}^{exp}", x.base())?;
        if exp != 0 {
            out.write_str(" + ")?;
        }
    }
    Ok(())
}

impl fmt::Display for PackedBigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_power(self, f)
    }
}

impl fmt::Debug for PackedBigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedBigUint")
            .field("base", &self.base())
            .field("bpd", &self.bits_per_digit())
            .field("digits", &self.digits().collect::<Vec<_>>())
            .finish()
    }
}
