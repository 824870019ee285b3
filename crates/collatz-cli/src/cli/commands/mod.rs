use super::args::*;

pub mod range;
pub mod sequence;
pub mod stats;

use anyhow::Result;
use collatz_core::{CacheConfig, SequenceCache};

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Test(args) => test::run(args, &cli.cache),
        Command::Range(args) => range::run(args, &cli.cache),
        Command::Sequence(args) => sequence::run(args, &cli.cache),
        Command::Stats => stats::run(&cli.cache),
    }
}

/// Merge precedence: defaults → --config file → COLLATZ_* env → flags.
pub fn resolve_config(args: &CacheArgs) -> Result<CacheConfig> {
    let mut config = match &args.config {
        Some(path) => CacheConfig::load(path)?,
        None => CacheConfig::default(),
    }
    .merge_env();

    if let Some(k) = args.seed_exponent {
        config = config.with_seed_exponent(k);
    }
    if let Some(n) = args.max_steps {
        config = config.with_max_steps(n);
    }
    Ok(config)
}

pub fn build_cache(args: &CacheArgs) -> Result<SequenceCache> {
    let config = resolve_config(args)?;
    tracing::debug!(
        seed_exponent = config.seed_exponent,
        max_steps = ?config.max_steps,
        "initializing sequence cache"
    );
    Ok(SequenceCache::with_config(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn cache_args() -> CacheArgs {
        CacheArgs {
            config: None,
            seed_exponent: None,
            max_steps: None,
            format: OutputFormat::Text,
        }
    }

    #[test]
    #[serial]
    fn test_flags_override_file_and_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed_exponent: 5\nmax_steps: 10").unwrap();

        std::env::remove_var("COLLATZ_SEED_EXPONENT");
        std::env::set_var("COLLATZ_MAX_STEPS", "20");
        let mut args = cache_args();
        args.config = Some(file.path().to_path_buf());
        let from_env = resolve_config(&args).unwrap();

        args.max_steps = Some(30);
        let from_flag = resolve_config(&args).unwrap();
        std::env::remove_var("COLLATZ_MAX_STEPS");

        assert_eq!(from_env.seed_exponent, 5);
        assert_eq!(from_env.max_steps, Some(20));
        assert_eq!(from_flag.max_steps, Some(30));
    }

    #[test]
    #[serial]
    fn test_invalid_flag_rejected_at_build() {
        let mut args = cache_args();
        args.seed_exponent = Some(64);
        let err = build_cache(&args).unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), 4);
    }
}
