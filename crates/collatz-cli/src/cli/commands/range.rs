use std::io;

use anyhow::Result;
use collatz_core::parse_integer;

use super::build_cache;
use crate::cli::args::{CacheArgs, OutputFormat, RangeArgs};
use crate::cli::output;
use crate::exit_codes::SUCCESS;

pub fn run(args: RangeArgs, cache_args: &CacheArgs) -> Result<i32> {
    let start = parse_integer(&args.start)?;
    let stop = parse_integer(&args.stop)?;

    let mut cache = build_cache(cache_args)?;
    let count = cache.simulate_range(start, stop, args.step)?;
    tracing::debug!(start, stop, step = args.step, count, "range simulated");

    let rows = cache.all_rows();
    let mut out = io::stdout().lock();
    match cache_args.format {
        OutputFormat::Text => output::write_table(&mut out, &rows)?,
        OutputFormat::Json => output::write_json(&mut out, &rows)?,
    }
    Ok(SUCCESS)
}
