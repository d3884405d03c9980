use super::{CollatzError, checked_add, ensure_positive, step};

/// Total stopping sum with an explicit loop.
pub fn iterative_sum(n: u64) -> Result<u64, CollatzError> {
    iterative_sum_with(n, |_| {})
}

/// Like [`iterative_sum`], calling `observer` with the running sum after each
/// term is added.
pub fn iterative_sum_with<F>(n: u64, mut observer: F) -> Result<u64, CollatzError>
where
    F: FnMut(u64),
{
    ensure_positive(n)?;
    // the terminal 1 is counted up front
    let mut sum = 1u64;
    let mut current = n;
    while current != 1 {
        sum = checked_add(sum, current)?;
        observer(sum);
        current = step(current)?;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_case() {
        assert_eq!(iterative_sum(1), Ok(1));
    }

    #[test]
    fn sum_of_33() {
        assert_eq!(iterative_sum(33), Ok(841));
    }

    #[test]
    fn running_sum_never_decreases() {
        for n in [7u64, 27, 33, 97, 871] {
            let mut seen = vec![1u64];
            let total = iterative_sum_with(n, |s| seen.push(s)).unwrap();
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "n = {n}");
            assert_eq!(seen.last().copied(), Some(total));
        }
    }

    #[test]
    fn observer_sees_one_update_per_step() {
        let mut updates = 0;
        iterative_sum_with(33, |_| updates += 1).unwrap();
        assert_eq!(updates, 26);
    }

    #[test]
    fn repeated_calls_match() {
        assert_eq!(iterative_sum(97), iterative_sum(97));
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(iterative_sum(0), Err(CollatzError::Zero));
    }

    #[test]
    fn running_sum_overflow_is_reported() {
        // u64::MAX - 1 steps cleanly, but adding its successor overflows the sum
        assert!(matches!(
            iterative_sum(u64::MAX - 1),
            Err(CollatzError::Overflow { .. })
        ));
    }
}
