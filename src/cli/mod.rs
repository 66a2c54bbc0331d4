use clap::{Parser, Subcommand};
use log::LevelFilter;

pub mod check;
pub mod gen;

/// Generate pipe-delimited `key|value` datasets.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub gen: gen::GenArgs,
    /// The log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify the rows of a generated file.
    Check(check::CheckArgs),
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("skewgen").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.gen.size, 1);
        assert_eq!(cli.gen.keys, 10);
        assert_eq!(cli.gen.data_dir, Path::new("/tmp/table.dat"));
        assert_eq!(cli.gen.skewness, 0.0);
        assert_eq!(cli.gen.seed, None);
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "--size", "3", "--keys", "-1", "--dataDir", "/data/x.dat", "--skewness", "0.5",
            "--seed", "9", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(cli.gen.size, 3);
        assert_eq!(cli.gen.keys, -1);
        assert_eq!(cli.gen.data_dir, Path::new("/data/x.dat"));
        assert_eq!(cli.gen.skewness, 0.5);
        assert_eq!(cli.gen.seed, Some(9));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_data_dir_alias() {
        let cli = parse(&["--data-dir", "/data/y.dat"]).unwrap();
        assert_eq!(cli.gen.data_dir, Path::new("/data/y.dat"));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        // Parsing fails closed: nothing runs with half-resolved flags.
        for args in [
            ["--size", "abc"],
            ["--size", "-1"],
            ["--keys", "ten"],
            ["--skewness", "x"],
            ["--log-level", "loud"],
            ["--bogus", "1"],
        ] {
            assert!(parse(&args).is_err(), "{args:?} should not parse");
        }
    }

    #[test]
    fn test_check_subcommand() {
        let cli = parse(&["check", "-f", "/tmp/x.dat", "--keys", "-1", "--size", "1"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.file, Path::new("/tmp/x.dat"));
                assert_eq!(args.keys, Some(-1));
                assert_eq!(args.size, Some(1));
                assert!(!args.strict_range);
            }
            None => panic!("expected check subcommand"),
        }
    }
}
