//! Graphviz (DOT) export of the region tree

use crate::quadtree::QuadtreeNode;
use crate::{Quadrant, Quadtree, Result};
use std::fmt;
use std::io::Write;

/// DOT rendering of a quadtree, produced by [`Quadtree::dot`]
///
/// Regions become circles labeled with their center, resident points become boxes hanging
/// off their leaf, and internal regions get one edge per quadrant. Node names come from a
/// counter that starts at 0 for every rendering and follows the pre-order walk.
#[derive(Debug, Clone, Copy)]
pub struct DotGraph<'a> {
    tree: &'a Quadtree,
}

impl Quadtree {
    pub fn dot(&self) -> DotGraph<'_> {
        DotGraph { tree: self }
    }

    /// Write the DOT rendering of this tree to `out`
    pub fn write_dot<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "{}", self.dot())?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph QuadTree {{")?;
        let mut next_id = 0;
        write_region(self.tree.root(), f, &mut next_id)?;
        writeln!(f, "}}")
    }
}

fn take_id(next_id: &mut usize) -> usize {
    let id = *next_id;
    *next_id += 1;
    id
}

/// Emit a region and its subtree, returning the region's node number
fn write_region(
    node: &QuadtreeNode,
    f: &mut fmt::Formatter<'_>,
    next_id: &mut usize,
) -> std::result::Result<usize, fmt::Error> {
    let id = take_id(next_id);
    let center = node.boundary.center();
    writeln!(
        f,
        "node{id} [label=\"Area ({},{})\", shape=circle, style=filled, fillcolor=lightblue];",
        center.x, center.y
    )?;

    match node.children.as_deref() {
        None => {
            for point in &node.points {
                let point_id = take_id(next_id);
                writeln!(
                    f,
                    "node{point_id} [label=\"P{} ({},{})\", shape=box, style=filled, fillcolor=lightgreen];",
                    point.id, point.x, point.y
                )?;
                writeln!(f, "node{id} -> node{point_id};")?;
            }
        }
        Some(children) => {
            let mut child_ids = [0; 4];
            for (slot, child) in child_ids.iter_mut().zip(children.iter()) {
                *slot = write_region(child, f, next_id)?;
            }
            for (quadrant, child_id) in Quadrant::ALL.iter().zip(child_ids) {
                writeln!(f, "node{id} -> node{child_id} [label=\"{quadrant}\"];")?;
            }
        }
    }

    Ok(id)
}
