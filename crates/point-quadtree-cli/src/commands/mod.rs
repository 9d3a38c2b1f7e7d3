pub mod bench;
pub mod demo;
pub mod export;

use anyhow::Context;
use point_quadtree_lib::{Boundary, Point};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Center and half-extent of the [0, 100] x [0, 100] world shared by all commands
const WORLD_CENTER: f64 = 50.0;
const WORLD_HALF_EXTENT: f64 = 50.0;

pub fn world() -> anyhow::Result<Boundary> {
    Ok(Boundary::new(
        WORLD_CENTER,
        WORLD_CENTER,
        WORLD_HALF_EXTENT,
        WORLD_HALF_EXTENT,
    )?)
}

/// Draw `n` points with ids `0..n` and coordinates uniform in [0, 100]
///
/// Fails when `n` exceeds the id space of [`Point`].
pub fn random_points<R: Rng>(n: usize, rng: &mut R) -> anyhow::Result<Vec<Point>> {
    let count = u32::try_from(n)
        .with_context(|| format!("{n} points exceed the maximum of {}", u32::MAX))?;
    Ok((0..count)
        .map(|id| {
            Point::new(
                id,
                rng.random_range(0..=100),
                rng.random_range(0..=100),
            )
        })
        .collect())
}

/// Open `path` for buffered writing, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
