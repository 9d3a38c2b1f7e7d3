//! Point-region quadtree
//!
//! Each region either stores up to `max_points_per_node` points directly (a leaf) or owns
//! exactly four children covering its quadrants (an internal region). A leaf that overflows
//! is subdivided once and for all: regions never merge back, removal only deletes points.

use crate::traversal::PreOrder;
use crate::{Boundary, Config, Point, Quadrant, QuadtreeError, Result};
use smallvec::SmallVec;
use tracing::{debug, error, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points resident in a leaf. Sized for the default capacity so small leaves stay inline.
pub(crate) type Residents = SmallVec<[Point; 4]>;

/// Root container for the quadtree spatial index
#[derive(Debug, Clone)]
pub struct Quadtree {
    /// Root region covering the whole indexed world
    root: QuadtreeNode,
    /// Capacity and depth limits
    config: Config,
    /// Number of resident points in the whole tree
    len: usize,
}

/// A single region of the quadtree
#[derive(Debug, Clone)]
pub(crate) struct QuadtreeNode {
    /// Area covered by this region
    pub(crate) boundary: Boundary,
    /// Depth level in the tree (0 = root)
    pub(crate) level: u32,
    /// Resident points, always empty once subdivided
    pub(crate) points: Residents,
    /// Child regions (NE, NW, SE, SW) if subdivided
    pub(crate) children: Option<Box<[QuadtreeNode; 4]>>,
}

/// Structural statistics about a quadtree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeInfo {
    /// Number of resident points
    pub point_count: usize,
    /// Number of regions, leaves and internal
    pub node_count: usize,
    /// Number of leaf regions
    pub leaf_count: usize,
    /// Depth of the deepest region (0 = only the root)
    pub depth: u32,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Quadtree {
    /// Create an empty quadtree over `boundary` with the default configuration
    pub fn new(boundary: Boundary) -> Self {
        Self {
            root: QuadtreeNode::new(boundary, 0),
            config: Config::default(),
            len: 0,
        }
    }

    /// Create an empty quadtree over `boundary` with a custom configuration
    pub fn with_config(boundary: Boundary, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: QuadtreeNode::new(boundary, 0),
            config,
            len: 0,
        })
    }

    /// Insert a point
    ///
    /// Returns `Ok(false)` when the point lies outside the indexed world. An
    /// [`QuadtreeError::OrphanedPoint`] error means a subdivision failed to place a point
    /// in any child; that point is no longer in the tree.
    pub fn insert(&mut self, point: Point) -> Result<bool> {
        match self.root.insert(point, &self.config) {
            Ok(inserted) => {
                if inserted {
                    self.len += 1;
                } else {
                    trace!(%point, "point outside of the indexed world");
                }
                Ok(inserted)
            }
            Err(err) => {
                // The lost point may be an older resident rather than `point`
                self.len = self.root.count_points();
                Err(err)
            }
        }
    }

    /// Check whether any point sits exactly at `(x, y)`, regardless of its id
    pub fn search(&self, x: i32, y: i32) -> bool {
        self.root.search(x, y)
    }

    /// Check whether this exact point (id and coordinates) is resident
    pub fn contains_point(&self, point: &Point) -> bool {
        self.root.find(point.id, point.x, point.y)
    }

    /// Append every resident point contained in `area` to `found`
    ///
    /// The order of the appended points is unspecified.
    pub fn range_query(&self, area: &Boundary, found: &mut Vec<Point>) {
        #[cfg(feature = "profiling")]
        profiling::scope!("quadtree::range_query");

        self.root.range_query(area, found);
    }

    /// Collect every resident point contained in `area`
    pub fn query(&self, area: &Boundary) -> Vec<Point> {
        let mut found = Vec::new();
        self.range_query(area, &mut found);
        found
    }

    /// Remove the first point matching `id`, `x` and `y` exactly
    ///
    /// Emptied regions are kept: the tree never contracts.
    pub fn remove(&mut self, id: u32, x: i32, y: i32) -> bool {
        let removed = self.root.remove(id, x, y);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Walk the regions in pre-order: a region, then its NE, NW, SE and SW subtrees
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(&self.root)
    }

    /// Number of resident points
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The indexed world
    pub fn boundary(&self) -> &Boundary {
        &self.root.boundary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Count regions and measure depth
    pub fn info(&self) -> TreeInfo {
        self.pre_order().fold(TreeInfo::default(), |mut info, node| {
            info.point_count += node.points.len();
            info.node_count += 1;
            if !node.divided {
                info.leaf_count += 1;
            }
            info.depth = info.depth.max(node.depth);
            info
        })
    }

    pub(crate) fn root(&self) -> &QuadtreeNode {
        &self.root
    }
}

impl QuadtreeNode {
    fn new(boundary: Boundary, level: u32) -> Self {
        Self {
            boundary,
            level,
            points: Residents::new(),
            children: None,
        }
    }

    /// Insert a point into this subtree, `Ok(false)` if it is outside this region
    fn insert(&mut self, point: Point, config: &Config) -> Result<bool> {
        if !self.boundary.contains(&point) {
            return Ok(false);
        }

        if self.children.is_none() {
            if self.points.len() < config.max_points_per_node || self.level >= config.max_depth {
                self.points.push(point);
                return Ok(true);
            }
            self.subdivide(config)?;
        }

        self.insert_into_children(point, config)?;
        Ok(true)
    }

    /// Hand a point contained in this region to the first child that accepts it
    fn insert_into_children(&mut self, point: Point, config: &Config) -> Result<()> {
        if let Some(children) = self.children.as_deref_mut() {
            for child in children.iter_mut() {
                if child.insert(point, config)? {
                    return Ok(());
                }
            }
        }

        let center = self.boundary.center();
        error!(
            %point,
            region = %self.boundary,
            level = self.level,
            "no child region accepted a point contained in its parent"
        );
        Err(QuadtreeError::OrphanedPoint {
            point,
            center_x: center.x,
            center_y: center.y,
        })
    }

    /// Split this leaf into four children and move its points down
    fn subdivide(&mut self, config: &Config) -> Result<()> {
        let boundary = self.boundary;
        let level = self.level + 1;

        debug!(
            region = %boundary,
            level = self.level,
            residents = self.points.len(),
            "subdividing region"
        );

        self.children = Some(Box::new(
            Quadrant::ALL.map(|quadrant| QuadtreeNode::new(boundary.quadrant(quadrant), level)),
        ));

        for point in std::mem::take(&mut self.points) {
            self.insert_into_children(point, config)?;
        }

        Ok(())
    }

    fn search(&self, x: i32, y: i32) -> bool {
        if !self.boundary.contains_xy(x, y) {
            return false;
        }

        if self.points.iter().any(|p| p.x == x && p.y == y) {
            return true;
        }

        self.children
            .as_deref()
            .is_some_and(|children| children.iter().any(|child| child.search(x, y)))
    }

    fn find(&self, id: u32, x: i32, y: i32) -> bool {
        if !self.boundary.contains_xy(x, y) {
            return false;
        }

        if self
            .points
            .iter()
            .any(|p| p.id == id && p.x == x && p.y == y)
        {
            return true;
        }

        self.children
            .as_deref()
            .is_some_and(|children| children.iter().any(|child| child.find(id, x, y)))
    }

    /// Query this region and its children for points inside `area`
    fn range_query(&self, area: &Boundary, found: &mut Vec<Point>) {
        // Prune subtrees that cannot hold a match
        if !area.intersects(&self.boundary) {
            return;
        }

        found.extend(self.points.iter().filter(|p| area.contains(p)).copied());

        if let Some(children) = self.children.as_deref() {
            for child in children.iter() {
                child.range_query(area, found);
            }
        }
    }

    fn remove(&mut self, id: u32, x: i32, y: i32) -> bool {
        if !self.boundary.contains_xy(x, y) {
            return false;
        }

        if let Some(index) = self
            .points
            .iter()
            .position(|p| p.id == id && p.x == x && p.y == y)
        {
            self.points.remove(index);
            return true;
        }

        self.children.as_deref_mut().is_some_and(|children| {
            children
                .iter_mut()
                .any(|child| child.remove(id, x, y))
        })
    }

    fn count_points(&self) -> usize {
        self.points.len()
            + self.children.as_deref().map_or(0, |children| {
                children.iter().map(QuadtreeNode::count_points).sum()
            })
    }
}
