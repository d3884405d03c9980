use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::driver::{Mismatch, Verdict};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable record of one driver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub start: u64,
    pub recursive_sum: u64,
    pub iterative_sum: u64,
    pub stopping_time: u64,
    pub sequence: Vec<u64>,
    pub agree: bool,
    /// Upper bound of the agreement sweep, 0 when no sweep ran.
    pub swept_upto: u64,
    pub first_mismatch: Option<Mismatch>,
}

impl From<&Verdict> for RunReport {
    fn from(verdict: &Verdict) -> Self {
        RunReport {
            start: verdict.start,
            recursive_sum: verdict.recursive,
            iterative_sum: verdict.iterative,
            stopping_time: verdict.stopping_time,
            sequence: verdict.sequence.clone(),
            agree: verdict.agree(),
            swept_upto: verdict.swept_upto,
            first_mismatch: verdict.mismatch,
        }
    }
}

impl RunReport {
    pub fn to_json_string(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let mut file = File::create(path)?;
        let content = self.to_json_string()?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} recursive={} iterative={} steps={} agree={}",
            self.start, self.recursive_sum, self.iterative_sum, self.stopping_time, self.agree,
        )?;
        if let Some(m) = &self.first_mismatch {
            write!(f, " (mismatch at {}: {} != {})", m.n, m.recursive, m.iterative)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::run;

    #[test]
    fn display_of_33() {
        let report = RunReport::from(&run(33, 0).unwrap());
        assert_eq!(
            report.to_string(),
            "n=33 recursive=841 iterative=841 steps=26 agree=true"
        );
    }

    #[test]
    fn display_mentions_mismatch() {
        let mut report = RunReport::from(&run(33, 0).unwrap());
        report.agree = false;
        report.first_mismatch = Some(Mismatch {
            n: 7,
            recursive: 1,
            iterative: 2,
        });
        assert!(report.to_string().ends_with("(mismatch at 7: 1 != 2)"));
    }

    #[test]
    fn json_file_reads_back() {
        let report = RunReport::from(&run(33, 50).unwrap());
        let path =
            std::env::temp_dir().join(format!("collatz-sum-{}-report.json", std::process::id()));
        report.save_to_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let parsed: RunReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.swept_upto, 50);
        assert_eq!(parsed.sequence.first(), Some(&33));
        assert_eq!(parsed.sequence.last(), Some(&1));
        assert_eq!(parsed.sequence.len() as u64, parsed.stopping_time + 1);
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let report = RunReport::from(&run(1, 0).unwrap());
        let err = report.save_to_file("no/such/dir/report.json").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
