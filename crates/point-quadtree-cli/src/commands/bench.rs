//! Wall-clock timing of insertion and range queries over growing inputs

use crate::settings::BenchArgs;
use anyhow::{Context, bail};
use point_quadtree_lib::{Boundary, Config, Quadtree};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Timings for one input size
#[derive(Debug, Clone, Copy)]
pub struct BenchRow {
    pub n: usize,
    pub insert: Duration,
    pub range: Duration,
    /// Points returned by the range query
    pub found: usize,
}

pub fn run(config: Config, args: &BenchArgs) -> anyhow::Result<()> {
    let out = super::open_output(Some(args.output.as_path()))?;
    let rows = run_to(config, args, out)
        .with_context(|| format!("benchmark to {} failed", args.output.display()))?;

    let total: Duration = rows.iter().map(|row| row.insert + row.range).sum();
    info!(
        runs = rows.len(),
        total_ms = total.as_millis() as u64,
        path = %args.output.display(),
        "benchmark written"
    );
    Ok(())
}

/// Run every input size and write the CSV to `out`
pub fn run_to<W: Write>(
    config: Config,
    args: &BenchArgs,
    mut out: W,
) -> anyhow::Result<Vec<BenchRow>> {
    if args.step == 0 {
        bail!("step must be at least 1");
    }
    config.validate()?;

    // One generator for the whole sweep, each size draws fresh points from it
    let mut rng = StdRng::seed_from_u64(args.seed);
    let window = Boundary::new(50.0, 50.0, 25.0, 25.0)?;
    let mut rows = Vec::new();

    writeln!(out, "n,time_insert,time_range")?;

    for n in (args.step..=args.max_points).step_by(args.step) {
        #[cfg(feature = "profiling")]
        profiling::scope!("bench::run");

        let mut tree = Quadtree::with_config(super::world()?, config)?;
        let points = super::random_points(n, &mut rng)?;

        let start = Instant::now();
        for point in &points {
            tree.insert(*point)?;
        }
        let insert = start.elapsed();

        let mut found = Vec::new();
        let start = Instant::now();
        tree.range_query(&window, &mut found);
        let range = start.elapsed();

        debug!(n, ?insert, ?range, found = found.len(), "benchmark run");
        writeln!(out, "{},{},{}", n, insert.as_micros(), range.as_micros())?;

        rows.push(BenchRow {
            n,
            insert,
            range,
            found: found.len(),
        });
    }

    out.flush()?;
    Ok(rows)
}
