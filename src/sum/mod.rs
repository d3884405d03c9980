//! Collatz step rule and the total stopping sum computed several ways.
//!
//! Every method sums each term of the sequence from the start value down to
//! and including 1, counting each term once.
use thiserror::Error;

mod iterative;
mod recursive;
mod stack;
mod stopping;

pub use iterative::{iterative_sum, iterative_sum_with};
pub use recursive::recursive_sum;
pub use stack::stack_sum;
pub use stopping::stopping_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollatzError {
    #[error("collatz sequences start at a positive integer, got 0")]
    Zero,
    #[error("term {term} overflows u64 while stepping or summing")]
    Overflow { term: u64 },
}

/// Next term: `n / 2` for even `n`, `3n + 1` for odd `n`.
pub fn step(n: u64) -> Result<u64, CollatzError> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        n.checked_mul(3)
            .and_then(|v| v.checked_add(1))
            .ok_or(CollatzError::Overflow { term: n })
    }
}

pub(crate) fn ensure_positive(n: u64) -> Result<(), CollatzError> {
    if n == 0 { Err(CollatzError::Zero) } else { Ok(()) }
}

pub(crate) fn checked_add(acc: u64, term: u64) -> Result<u64, CollatzError> {
    acc.checked_add(term).ok_or(CollatzError::Overflow { term })
}

/// Terms of the sequence starting at `n`, ending with 1.
///
/// A failed step is yielded once as an error, after which the iterator is
/// exhausted.
#[derive(Debug, Clone)]
pub struct Trajectory {
    next: Option<Result<u64, CollatzError>>,
}

impl Trajectory {
    pub fn new(n: u64) -> Self {
        Trajectory {
            next: Some(ensure_positive(n).map(|()| n)),
        }
    }
}

impl Iterator for Trajectory {
    type Item = Result<u64, CollatzError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Ok(term) = current {
            if term != 1 {
                self.next = Some(step(term));
            }
        }
        Some(current)
    }
}
