use std::io::{self, Write};

use anyhow::Result;

use super::build_cache;
use crate::cli::args::{CacheArgs, OutputFormat};
use crate::cli::output;
use crate::exit_codes::SUCCESS;

pub fn run(cache_args: &CacheArgs) -> Result<i32> {
    let stats = build_cache(cache_args)?.stats();

    let mut out = io::stdout().lock();
    match cache_args.format {
        OutputFormat::Text => {
            writeln!(out, "entries:  {}", stats.entries)?;
            writeln!(out, "seeded:   {}", stats.seeded)?;
            writeln!(out, "walked:   {}", stats.walked)?;
            writeln!(
                out,
                "frontier: {} (2^{})",
                stats.frontier, stats.frontier_exponent
            )?;
        }
        OutputFormat::Json => output::write_json(&mut out, &stats)?,
    }
    Ok(SUCCESS)
}
