//! Sample session over a handful of fixed points

use crate::settings::DemoArgs;
use anyhow::Context;
use point_quadtree_lib::{Boundary, Config, Point, Quadtree};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Seven points, more than the default leaf capacity
pub const SAMPLE_POINTS: [Point; 7] = [
    Point::new(1, 12, 2),
    Point::new(2, 70, 20),
    Point::new(3, 25, 50),
    Point::new(4, 10, 80),
    Point::new(5, 45, 25),
    Point::new(6, 67, 98),
    Point::new(7, 10, 11),
];

pub fn run(config: Config, args: &DemoArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut tree = Quadtree::with_config(super::world()?, config)?;

    for point in SAMPLE_POINTS {
        if !tree.insert(point)? {
            warn!(%point, "sample point outside of the world");
        }
    }
    let info = tree.info();
    info!(
        points = info.point_count,
        regions = info.node_count,
        depth = info.depth,
        "sample points indexed"
    );

    if let Some(path) = &args.dot_before {
        write_dot_file(&tree, path)?;
    }

    let found = tree.search(45, 25);
    writeln!(
        out,
        "search (45,25): {}",
        if found { "found" } else { "not found" }
    )?;

    let area = Boundary::new(50.0, 50.0, 30.0, 30.0)?;
    writeln!(out, "points in region {area}:")?;
    for point in tree.query(&area) {
        writeln!(out, " - {point}")?;
    }

    let removed = tree.remove(5, 45, 25);
    writeln!(
        out,
        "remove P5 (45,25): {}",
        if removed { "removed" } else { "not found" }
    )?;

    if let Some(path) = &args.dot_after {
        write_dot_file(&tree, path)?;
    }

    writeln!(out, "pre-order traversal:")?;
    write!(out, "{tree}")?;
    out.flush()?;

    Ok(())
}

fn write_dot_file(tree: &Quadtree, path: &Path) -> anyhow::Result<()> {
    let out = super::open_output(Some(path))?;
    tree.write_dot(out)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote DOT graph");
    Ok(())
}
