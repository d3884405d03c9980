use super::{CollatzError, checked_add, ensure_positive, step};

/// Recursive accumulation order without native recursion: terms are pushed
/// while stepping down to 1, then popped and added back up the chain.
pub fn stack_sum(n: u64) -> Result<u64, CollatzError> {
    ensure_positive(n)?;
    let mut pending = Vec::new();
    let mut current = n;
    while current != 1 {
        pending.push(current);
        current = step(current)?;
    }

    let mut sum = 1u64;
    while let Some(term) = pending.pop() {
        sum = checked_add(sum, term)?;
    }
    Ok(sum)
}
