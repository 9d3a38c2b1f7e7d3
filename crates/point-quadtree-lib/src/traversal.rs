//! Read-only pre-order traversal of the quadtree
//!
//! The walk visits a region before its children and always descends in NE, NW, SE, SW
//! order. Reports and graph exports number regions in this order, so it must not change.

use crate::quadtree::QuadtreeNode;
use crate::{Boundary, Point, Quadrant, Quadtree};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Borrowed view of one region during a walk
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    /// Depth level in the tree (0 = root)
    pub depth: u32,
    /// Which quadrant of its parent this region is, `None` for the root
    pub quadrant: Option<Quadrant>,
    pub boundary: Boundary,
    /// Resident points, empty for internal regions
    pub points: &'a [Point],
    pub divided: bool,
}

/// Pre-order iterator over the regions of a [`Quadtree`]
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<(Option<Quadrant>, &'a QuadtreeNode)>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: &'a QuadtreeNode) -> Self {
        Self {
            stack: vec![(None, root)],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (quadrant, node) = self.stack.pop()?;

        if let Some(children) = node.children.as_deref() {
            // Reversed so that NE is popped first
            for (quadrant, child) in Quadrant::ALL.iter().zip(children.iter()).rev() {
                self.stack.push((Some(*quadrant), child));
            }
        }

        Some(NodeView {
            depth: node.level,
            quadrant,
            boundary: node.boundary,
            points: node.points.as_slice(),
            divided: node.children.is_some(),
        })
    }
}

/// Owned record of one region, numbered in pre-order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeSnapshot {
    /// Sequence number in the walk, starting at 0 for the root
    pub id: usize,
    /// Sequence number of the parent region
    pub parent: Option<usize>,
    pub quadrant: Option<Quadrant>,
    pub depth: u32,
    pub boundary: Boundary,
    pub divided: bool,
    pub points: Vec<Point>,
}

impl Quadtree {
    /// Take an owned pre-order snapshot of every region
    ///
    /// Numbering restarts at 0 on every call.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        let mut nodes = Vec::new();
        collect(self.root(), None, None, &mut nodes);
        nodes
    }
}

fn collect(
    node: &QuadtreeNode,
    parent: Option<usize>,
    quadrant: Option<Quadrant>,
    nodes: &mut Vec<NodeSnapshot>,
) {
    let id = nodes.len();
    nodes.push(NodeSnapshot {
        id,
        parent,
        quadrant,
        depth: node.level,
        boundary: node.boundary,
        divided: node.children.is_some(),
        points: node.points.to_vec(),
    });

    if let Some(children) = node.children.as_deref() {
        for (quadrant, child) in Quadrant::ALL.iter().zip(children.iter()) {
            collect(child, Some(id), Some(*quadrant), nodes);
        }
    }
}

/// Human-readable pre-order report, one line per region
impl fmt::Display for Quadtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, node) in self.pre_order().enumerate() {
            let center = node.boundary.center();
            let indent = node.depth as usize * 2;
            write!(f, "{:indent$}Node {id}", "")?;
            if let Some(quadrant) = node.quadrant {
                write!(f, " [{quadrant}]")?;
            }
            write!(f, " center ({},{}) points:", center.x, center.y)?;
            for point in node.points {
                write!(f, " P{}({},{})", point.id, point.x, point.y)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Boundary, Config, Point, Quadrant, Quadtree};

    fn sample_tree() -> Quadtree {
        let mut tree = Quadtree::new(Boundary::new(50.0, 50.0, 50.0, 50.0).unwrap());
        for (id, x, y) in [
            (1, 12, 2),
            (2, 70, 20),
            (3, 25, 50),
            (4, 10, 80),
            (5, 45, 25),
            (6, 67, 98),
            (7, 10, 11),
        ] {
            tree.insert(Point::new(id, x, y)).unwrap();
        }
        tree
    }

    #[test]
    fn test_pre_order_visits_self_then_quadrants() {
        let tree = sample_tree();
        let quadrants: Vec<Option<Quadrant>> = tree.pre_order().map(|n| n.quadrant).collect();

        assert_eq!(
            quadrants,
            vec![
                None,
                Some(Quadrant::NE),
                Some(Quadrant::NW),
                Some(Quadrant::SE),
                Some(Quadrant::SW),
            ]
        );
    }

    #[test]
    fn test_pre_order_depth_first() {
        let boundary = Boundary::new(50.0, 50.0, 50.0, 50.0).unwrap();
        let mut tree = Quadtree::with_config(boundary, Config::with_capacity(1)).unwrap();
        // Two points in NE force NE to subdivide before NW is visited
        tree.insert(Point::new(1, 90, 10)).unwrap();
        tree.insert(Point::new(2, 60, 40)).unwrap();
        tree.insert(Point::new(3, 10, 10)).unwrap();

        let walk: Vec<(u32, Option<Quadrant>)> =
            tree.pre_order().map(|n| (n.depth, n.quadrant)).collect();
        assert_eq!(
            walk,
            vec![
                (0, None),
                (1, Some(Quadrant::NE)),
                (2, Some(Quadrant::NE)),
                (2, Some(Quadrant::NW)),
                (2, Some(Quadrant::SE)),
                (2, Some(Quadrant::SW)),
                (1, Some(Quadrant::NW)),
                (1, Some(Quadrant::SE)),
                (1, Some(Quadrant::SW)),
            ]
        );
    }

    #[test]
    fn test_snapshot_ids_and_parents() {
        let tree = sample_tree();
        let snapshot = tree.snapshot();

        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot[0].parent, None);
        assert!(snapshot[0].divided);
        assert!(snapshot[0].points.is_empty());
        for (index, node) in snapshot.iter().enumerate() {
            assert_eq!(node.id, index);
        }
        for node in &snapshot[1..] {
            assert_eq!(node.parent, Some(0));
            assert!(!node.divided);
        }

        let nw = &snapshot[2];
        assert_eq!(nw.quadrant, Some(Quadrant::NW));
        assert_eq!(
            nw.points.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 3, 5, 7]
        );
    }

    #[test]
    fn test_snapshot_numbering_is_per_call() {
        let tree = sample_tree();
        assert_eq!(tree.snapshot(), tree.snapshot());
    }

    #[test]
    fn test_snapshot_matches_pre_order() {
        let tree = sample_tree();
        let from_walk: Vec<(u32, Option<Quadrant>, usize)> = tree
            .pre_order()
            .map(|n| (n.depth, n.quadrant, n.points.len()))
            .collect();
        let from_snapshot: Vec<(u32, Option<Quadrant>, usize)> = tree
            .snapshot()
            .iter()
            .map(|n| (n.depth, n.quadrant, n.points.len()))
            .collect();
        assert_eq!(from_walk, from_snapshot);
    }

    #[test]
    fn test_display_report() {
        let tree = sample_tree();
        let report = tree.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Node 0 center (50,50) points:");
        assert_eq!(lines[1], "  Node 1 [NE] center (75,25) points: P2(70,20)");
        assert_eq!(
            lines[2],
            "  Node 2 [NW] center (25,25) points: P1(12,2) P3(25,50) P5(45,25) P7(10,11)"
        );
        assert_eq!(lines[3], "  Node 3 [SE] center (75,75) points: P6(67,98)");
        assert_eq!(lines[4], "  Node 4 [SW] center (25,75) points: P4(10,80)");
    }
}
