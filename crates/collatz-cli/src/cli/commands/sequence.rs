use std::io::{self, Write};

use anyhow::Result;
use collatz_core::parse_start_value;

use super::build_cache;
use crate::cli::args::{CacheArgs, OutputFormat, SequenceArgs};
use crate::cli::output;
use crate::exit_codes::SUCCESS;

pub fn run(args: SequenceArgs, cache_args: &CacheArgs) -> Result<i32> {
    let value = parse_start_value(&args.value)?;
    let mut cache = build_cache(cache_args)?;
    let terms = cache.sequence(value)?;

    let mut out = io::stdout().lock();
    match cache_args.format {
        OutputFormat::Text => writeln!(out, "{}", output::format_terms(&terms))?,
        OutputFormat::Json => output::write_json(&mut out, &terms)?,
    }
    Ok(SUCCESS)
}
