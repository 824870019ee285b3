use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "collatz",
    version,
    about = "Collatz simulator: memoized sequence lengths, peaks and next terms"
)]
pub struct Cli {
    #[command(flatten)]
    pub cache: CacheArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate the given values and print their table entries
    Test(TestArgs),
    /// Simulate every value in START..STOP and print the whole table
    Range(RangeArgs),
    /// Print the full sequence from VALUE down to 1
    Sequence(SequenceArgs),
    /// Print table size and seed frontier
    Stats,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CacheArgs {
    /// YAML file with cache settings (seed_exponent, max_steps)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed powers of two up to 2^K
    #[arg(long, value_name = "K", global = true)]
    pub seed_exponent: Option<u32>,

    /// Give up on a walk after N new values
    #[arg(long, value_name = "N", global = true)]
    pub max_steps: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
#[command(allow_negative_numbers = true)]
pub struct TestArgs {
    /// Integers to test
    pub values: Vec<String>,

    /// Display the contents of the whole table
    #[arg(short, long)]
    pub verbose: bool,

    /// Display the stack for each computed value
    #[arg(short, long)]
    pub stack: bool,
}

#[derive(clap::Args, Debug, Clone)]
#[command(allow_negative_numbers = true)]
pub struct RangeArgs {
    pub start: String,
    pub stop: String,
    /// Negative to count down from START
    #[arg(default_value_t = 1)]
    pub step: i64,
}

#[derive(clap::Args, Debug, Clone)]
#[command(allow_negative_numbers = true)]
pub struct SequenceArgs {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_test_flags() {
        let cli = Cli::try_parse_from(["collatz", "test", "-s", "-v", "3", "7"]).unwrap();
        match cli.cmd {
            Command::Test(args) => {
                assert!(args.stack && args.verbose);
                assert_eq!(args.values, vec!["3", "7"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_negative_value_is_positional() {
        let cli = Cli::try_parse_from(["collatz", "test", "-5"]).unwrap();
        match cli.cmd {
            Command::Test(args) => assert_eq!(args.values, vec!["-5"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_range_negative_step() {
        let cli = Cli::try_parse_from(["collatz", "range", "10", "1", "-3"]).unwrap();
        match cli.cmd {
            Command::Range(args) => {
                assert_eq!((args.start.as_str(), args.stop.as_str()), ("10", "1"));
                assert_eq!(args.step, -3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "collatz",
            "range",
            "1",
            "10",
            "--format",
            "json",
            "--max-steps",
            "100",
        ])
        .unwrap();
        assert_eq!(cli.cache.format, OutputFormat::Json);
        assert_eq!(cli.cache.max_steps, Some(100));
        match cli.cmd {
            Command::Range(args) => assert_eq!(args.step, 1),
            other => panic!("unexpected {other:?}"),
        }
    }
}
