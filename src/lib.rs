#![warn(non_snake_case)]

pub mod config;
pub mod driver;
pub mod options;
pub mod report;
pub mod sum;

pub use driver::{Verdict, driver_input, run};
pub use sum::{CollatzError, iterative_sum, recursive_sum};
