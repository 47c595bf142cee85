//! Estimate command implementation
//!
//! Runs one sampling pass and prints the estimate and the elapsed wall-clock
//! time.

use std::io::Write;
use std::time::{Duration, Instant};

use pimc_kernel::mc::{Sampler, TrialCount};
use tracing::info;

use crate::config::PimcConfig;
use crate::Result;

/// Run the estimate command, writing the report to `out`
pub fn run<W: Write>(trials: TrialCount, config: &PimcConfig, out: &mut W) -> Result<()> {
    let start = Instant::now();

    let mut sampler = match config.seed {
        Some(seed) => Sampler::seeded(seed),
        None => Sampler::time_seeded(),
    };
    info!(trials = %trials, seed = sampler.seed(), "Starting sampling run");

    let run = sampler.run(trials);
    let elapsed = start.elapsed();

    info!(
        hits = run.hits(),
        elapsed_secs = elapsed.as_secs_f64(),
        "Sampling run finished"
    );

    out.write_all(render_report(run.estimate(), elapsed, config.precision).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Format the two-line report
pub fn render_report(estimate: f64, elapsed: Duration, precision: usize) -> String {
    format!(
        "Pi: {:.prec$}\nTime: {:.prec$} seconds\n",
        estimate,
        elapsed.as_secs_f64(),
        prec = precision
    )
}
