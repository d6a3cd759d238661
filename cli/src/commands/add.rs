use anyhow::{Context, Result};
use packed::PackedBigUint;

/// Sum `values` in `base`.
pub fn sum_values(base: u64, values: &[u64]) -> Result<PackedBigUint> {
    let mut acc = PackedBigUint::zero(base).context("Failed to create accumulator")?;
    for &v in values {
        let term = PackedBigUint::new(v, base)
            .with_context(|| format!("Failed to represent {v} in base {base}"))?;
        acc.add_assign(&term)
            .with_context(|| format!("Failed to add {v}"))?;
    }
    log::debug!(
        "sum of {} values: {} digits, {} bytes allocated",
        values.len(),
        acc.digit_count(),
        acc.capacity_bytes()
    );
    Ok(acc)
}

/// Render the sum either as powers of the base or as a digit list.
pub fn render_sum(base: u64, values: &[u64], digits: bool) -> Result<String> {
    let sum = sum_values(base, values)?;
    if digits {
        let list: Vec<String> = sum.digits().map(|d| d.to_string()).collect();
        Ok(format!("[{}]", list.join(", ")))
    } else {
        Ok(sum.to_power_string())
    }
}

pub fn add_command(base: u64, values: &[u64], digits: bool) -> Result<()> {
    println!("{}", render_sum(base, values, digits)?);
    Ok(())
}
