//! Point Quadtree Library - Core Data Structures for 2-D Point Indexing
//!
//! This library provides a point-region quadtree that stores labeled integer points in a
//! bounded plane and answers exact-match, containment and rectangular range queries by
//! recursively partitioning space into four quadrants.
//!
//! # Architecture
//!
//! - **[`Point`]**: Immutable labeled point on the integer plane
//! - **[`Boundary`]**: Axis-aligned rectangle with edge-inclusive containment
//! - **[`Quadtree`]**: The spatial index, a strictly owned recursive tree of regions
//! - **[`NodeSnapshot`] / [`PreOrder`]**: Read-only pre-order traversal for reporting
//! - **[`DotGraph`]**: Graphviz export of the traversal
//!
//! # Example
//!
//! ```rust
//! use point_quadtree_lib::{Boundary, Point, Quadtree};
//!
//! # fn main() -> point_quadtree_lib::Result<()> {
//! let mut tree = Quadtree::new(Boundary::new(50.0, 50.0, 50.0, 50.0)?);
//! assert!(tree.insert(Point::new(1, 12, 2))?);
//! assert!(tree.search(12, 2));
//!
//! let found = tree.query(&Boundary::new(10.0, 5.0, 5.0, 5.0)?);
//! assert_eq!(found, vec![Point::new(1, 12, 2)]);
//! # Ok(())
//! # }
//! ```
//!
//! # Performance Characteristics
//!
//! - **Insert / search / remove**: O(D × C) where D=depth, C=points per leaf
//! - **Range query**: O(D + K) for compact queries, K=visited leaves; disjoint subtrees are pruned
//! - **Memory**: O(N) points + O(R) regions, regions are never reclaimed by removal

mod config;
mod export;
mod geometry;
mod quadtree;
mod traversal;

// Public API exports
pub use config::Config;
pub use export::DotGraph;
pub use geometry::{Boundary, Point, Quadrant};
pub use quadtree::{Quadtree, TreeInfo};
pub use traversal::{NodeSnapshot, NodeView, PreOrder};

/// Error types for the quadtree
#[derive(Debug, thiserror::Error)]
pub enum QuadtreeError {
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A point inside a region was rejected by all four of its children. This means the
    /// quadrants do not tile their parent and the point has been dropped from the tree.
    #[error("Point {point} was not accepted by any child of the region centered at ({center_x}, {center_y})")]
    OrphanedPoint {
        point: Point,
        center_x: f64,
        center_y: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuadtreeError>;
