use anyhow::{Context, Result, anyhow};
use log::{debug, error};

use collatz_sum::config::DriverConfig;
use collatz_sum::driver::{self, EXIT_FAILURE};
use collatz_sum::options::Options;
use collatz_sum::report::RunReport;

fn main() {
    if std::env::var("COLLATZ_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("COLLATZ_LOG")
            .write_style("COLLATZ_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            eprintln!("collatz-sum: {e:#}");
            EXIT_FAILURE
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let options = Options::parse_from_str(&std::env::var("COLLATZ_FLAGS").unwrap_or_default())
        .map_err(|e| anyhow!("invalid COLLATZ_FLAGS: {e}"))?;
    debug!("options from environment: {:?}", options);

    let config = DriverConfig::load_from_file(&options.config)?;
    debug!("config: {:?}", config);

    let settings = config.merge(&options);
    let start = settings.start;
    let verdict = driver::run(start, settings.sweep_upto)
        .with_context(|| format!("summing the sequence of {start}"))?;

    let report = RunReport::from(&verdict);
    println!("{report}");
    if let Some(path) = settings.report.as_ref() {
        report
            .save_to_file(path)
            .with_context(|| format!("Failed to write report: {:?}", path))?;
        debug!("report written to {:?}", path);
    }

    Ok(verdict.exit_code())
}
