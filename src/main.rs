use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use scaler::{cli::Args, logging, report::render, scaling::compute};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = compute(args.width, args.height, args.max_size, args.mode).with_context(|| {
        format!(
            "computing {} options for {}x{}",
            args.mode, args.width, args.height
        )
    })?;
    info!(
        count = result.candidates.len(),
        mode = %result.mode,
        max_size = result.max_size,
        "scaling options ready"
    );

    let mut out = io::stdout().lock();
    render(&result, &mut out).context("writing scaling options")?;
    out.flush().context("flushing standard output")?;
    Ok(())
}
