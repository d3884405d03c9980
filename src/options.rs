//! Parsing Options.
//! Read from the `COLLATZ_FLAGS` environment variable, never from argv.

use clap::{Arg, Command, value_parser};
use std::error::Error;
use std::path::PathBuf;

pub const DEFAULT_CONFIG: &str = "collatz.toml";

fn make_options_parser() -> clap::Command {
    let parser = Command::new("collatz-sum")
        .no_binary_name(true)
        .version("v0.1.0")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to the TOML config file")
                .default_value(DEFAULT_CONFIG),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the JSON report will be stored"),
        )
        .arg(
            Arg::new("start")
                .short('n')
                .long("start")
                .value_name("N")
                .help("Starting value, overrides the fixed driver input")
                .value_parser(value_parser!(u64).range(1..)),
        );
    parser
}

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub config: PathBuf,
    pub output: Option<PathBuf>,
    pub start: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            config: PathBuf::from(DEFAULT_CONFIG),
            output: None,
            start: None,
        }
    }
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let config = matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        let output = matches.get_one::<String>("output").map(PathBuf::from);
        let start = matches.get_one::<u64>("start").copied();

        Ok(Options {
            config,
            output,
            start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let options = Options::parse_from_str("").unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_parse_from_str() {
        let options = Options::parse_from_str("-n 27 -o 'my report.json' --config c.toml").unwrap();
        assert_eq!(options.start, Some(27));
        assert_eq!(options.output, Some(PathBuf::from("my report.json")));
        assert_eq!(options.config, PathBuf::from("c.toml"));
    }

    #[test]
    fn test_parse_from_str_err() {
        let options = Options::parse_from_str("-k unknown");
        assert!(options.is_err());
    }

    #[test]
    fn test_parse_from_args_err() {
        let options = Options::parse_from_args(&["--start".to_owned(), "0".to_owned()]);
        assert!(options.is_err());
        let options = Options::parse_from_args(&["--start".to_owned(), "x".to_owned()]);
        assert!(options.is_err());
    }

    #[test]
    fn test_unbalanced_quote_err() {
        assert!(Options::parse_from_str("-o 'unterminated").is_err());
    }
}
