use super::{CollatzError, ensure_positive, step};

/// Number of steps from `n` down to 1.
pub fn stopping_time(n: u64) -> Result<u64, CollatzError> {
    ensure_positive(n)?;
    let mut steps = 0u64;
    let mut current = n;
    while current != 1 {
        current = step(current)?;
        steps += 1;
    }
    Ok(steps)
}
