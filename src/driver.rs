//! Runs both summing methods on one start value and compares them.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::sum::{CollatzError, Trajectory, iterative_sum, recursive_sum, stopping_time};

pub const EXIT_AGREE: i32 = 0;
pub const EXIT_DISAGREE: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

/// The fixed start value, `5 * 3 + (20 - 20 % 3)`.
pub const fn driver_input() -> u64 {
    let tmp = 20 % 3;
    5 * 3 + (20 - tmp)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub n: u64,
    pub recursive: u64,
    pub iterative: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub start: u64,
    pub recursive: u64,
    pub iterative: u64,
    pub stopping_time: u64,
    /// Every term from `start` down to 1.
    pub sequence: Vec<u64>,
    pub swept_upto: u64,
    /// First disagreement found by the sweep.
    pub mismatch: Option<Mismatch>,
}

impl Verdict {
    /// True iff both sums for the start value are equal and the sweep, if
    /// any, found no mismatch.
    pub fn agree(&self) -> bool {
        self.recursive == self.iterative && self.mismatch.is_none()
    }

    pub fn exit_code(&self) -> i32 {
        if self.agree() { EXIT_AGREE } else { EXIT_DISAGREE }
    }
}

/// Checks both methods agree on every value in `1..=limit`.
pub fn sweep(limit: u64) -> Result<Option<Mismatch>, CollatzError> {
    for n in 1..=limit {
        let recursive = recursive_sum(n)?;
        let iterative = iterative_sum(n)?;
        if recursive != iterative {
            warn!("sums differ at {n}: recursive {recursive}, iterative {iterative}");
            return Ok(Some(Mismatch {
                n,
                recursive,
                iterative,
            }));
        }
    }
    debug!("sums agree for 1..={limit}");
    Ok(None)
}

pub fn run(start: u64, sweep_upto: u64) -> Result<Verdict, CollatzError> {
    let recursive = recursive_sum(start)?;
    let iterative = iterative_sum(start)?;
    let steps = stopping_time(start)?;
    let sequence = Trajectory::new(start).collect::<Result<Vec<_>, _>>()?;
    info!("n = {start}: recursive {recursive}, iterative {iterative}, {steps} steps");

    let mismatch = if sweep_upto > 0 {
        sweep(sweep_upto)?
    } else {
        None
    };

    Ok(Verdict {
        start,
        recursive,
        iterative,
        stopping_time: steps,
        sequence,
        swept_upto: sweep_upto,
        mismatch,
    })
}
