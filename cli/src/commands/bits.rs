use anyhow::{bail, Result};
use packed::bitfield::get_bits;

/// Extract `[start, end)` from `bytes`, checking the range first.
pub fn read_bits(bytes: &[u8], start: usize, end: usize) -> Result<u64> {
    if start >= end {
        bail!("Empty bit range {start}..{end}");
    }
    if end - start > 64 {
        bail!("Bit range {start}..{end} is wider than 64 bits");
    }
    if end > bytes.len() * 8 {
        bail!(
            "Bit range {start}..{end} runs past a {}-byte buffer",
            bytes.len()
        );
    }
    Ok(get_bits(bytes, start, end))
}

pub fn bits_command(bytes: &[u8], start: usize, end: usize) -> Result<()> {
    let value = read_bits(bytes, start, end)?;
    println!("{value:#0width$b}", width = end - start + 2);
    Ok(())
}
