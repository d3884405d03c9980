use super::{CollatzError, checked_add, ensure_positive, step};

/// Total stopping sum by structural recursion on the step relation.
///
/// Call depth equals the length of the sequence; use
/// [`stack_sum`](super::stack_sum) where that matters.
pub fn recursive_sum(n: u64) -> Result<u64, CollatzError> {
    ensure_positive(n)?;
    if n == 1 {
        return Ok(1);
    }
    let rest = recursive_sum(step(n)?)?;
    checked_add(rest, n)
}
