//! Write a randomly populated tree as DOT or JSON

use crate::settings::{ExportArgs, ExportFormat};
use point_quadtree_lib::{Boundary, Config, NodeSnapshot, Quadtree, TreeInfo};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// JSON document: the tree's parameters followed by its pre-order snapshot
#[derive(Debug, Serialize)]
struct TreeDocument {
    boundary: Boundary,
    config: Config,
    info: TreeInfo,
    nodes: Vec<NodeSnapshot>,
}

pub fn run(config: Config, args: &ExportArgs) -> anyhow::Result<()> {
    let tree = build(config, args)?;
    let out = super::open_output(args.output.as_deref())?;
    write(&tree, args.format, out)?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), format = ?args.format, "export written");
    }
    Ok(())
}

fn build(config: Config, args: &ExportArgs) -> anyhow::Result<Quadtree> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut tree = Quadtree::with_config(super::world()?, config)?;
    for point in super::random_points(args.points, &mut rng)? {
        tree.insert(point)?;
    }
    Ok(tree)
}

fn write<W: Write>(tree: &Quadtree, format: ExportFormat, mut out: W) -> anyhow::Result<()> {
    match format {
        ExportFormat::Dot => tree.write_dot(out)?,
        ExportFormat::Json => {
            let document = TreeDocument {
                boundary: *tree.boundary(),
                config: *tree.config(),
                info: tree.info(),
                nodes: tree.snapshot(),
            };
            serde_json::to_writer_pretty(&mut out, &document)?;
            writeln!(out)?;
            out.flush()?;
        }
    }
    Ok(())
}
