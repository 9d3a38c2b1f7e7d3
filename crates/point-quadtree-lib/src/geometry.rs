//! Geometry primitives: labeled points, edge-inclusive boundaries and quadrant naming

use crate::{QuadtreeError, Result};
use geo::{Coord, Rect};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A labeled point on the integer plane
///
/// The `id` is assigned by the caller and is not tied to the coordinates: several points
/// may share the same `(x, y)` and are told apart by `id` on removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub id: u32,
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(id: u32, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }
}

impl From<Point> for Coord<f64> {
    #[inline(always)]
    fn from(point: Point) -> Self {
        Coord {
            x: f64::from(point.x),
            y: f64::from(point.y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{} ({},{})", self.id, self.x, self.y)
    }
}

/// One of the four children of a subdivided region
///
/// The y axis grows downward, so the northern quadrants hold the smaller y values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quadrant {
    NE,
    NW,
    SE,
    SW,
}

impl Quadrant {
    /// All quadrants in placement priority order.
    ///
    /// Points lying on a split line are contained by more than one child; the first
    /// child in this order that accepts the point keeps it.
    pub const ALL: [Quadrant; 4] = [Quadrant::NE, Quadrant::NW, Quadrant::SE, Quadrant::SW];

    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::NE => "NE",
            Quadrant::NW => "NW",
            Quadrant::SE => "SE",
            Quadrant::SW => "SW",
        }
    }

    #[inline(always)]
    const fn is_east(self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::SE)
    }

    #[inline(always)]
    const fn is_north(self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::NW)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Axis-aligned rectangle, inclusive on all four edges
///
/// Described by a center and half-extents, stored as min/max corners so that
/// quadrants can be cut at the exact midpoint of their parent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "BoundaryRepr", into = "BoundaryRepr")
)]
pub struct Boundary {
    rect: Rect<f64>,
}

/// Serialized form of a [`Boundary`], validated through [`Boundary::new`] on the way in
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct BoundaryRepr {
    x: f64,
    y: f64,
    half_width: f64,
    half_height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<BoundaryRepr> for Boundary {
    type Error = QuadtreeError;

    fn try_from(repr: BoundaryRepr) -> Result<Self> {
        Boundary::new(repr.x, repr.y, repr.half_width, repr.half_height)
    }
}

#[cfg(feature = "serde")]
impl From<Boundary> for BoundaryRepr {
    fn from(boundary: Boundary) -> Self {
        let center = boundary.center();
        Self {
            x: center.x,
            y: center.y,
            half_width: boundary.half_width(),
            half_height: boundary.half_height(),
        }
    }
}

impl Boundary {
    /// Create a boundary from its center and half-extents
    ///
    /// # Errors
    /// Returns [`QuadtreeError::InvalidBoundary`] when a half-extent is not strictly
    /// positive or any value is not finite.
    pub fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> Result<Self> {
        if ![x, y, half_width, half_height].iter().all(|v| v.is_finite()) {
            return Err(QuadtreeError::InvalidBoundary(format!(
                "non-finite value in center ({x}, {y}) or half-extents ({half_width}, {half_height})"
            )));
        }
        if half_width <= 0.0 || half_height <= 0.0 {
            return Err(QuadtreeError::InvalidBoundary(format!(
                "half-extents must be positive, got ({half_width}, {half_height})"
            )));
        }

        let rect = Rect::new(
            Coord {
                x: x - half_width,
                y: y - half_height,
            },
            Coord {
                x: x + half_width,
                y: y + half_height,
            },
        );
        // Corners, extents and the split point must all stay representable
        let (min, max, mid) = (rect.min(), rect.max(), rect.center());
        if ![min.x, min.y, max.x, max.y, mid.x, mid.y, rect.width(), rect.height()]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(QuadtreeError::InvalidBoundary(format!(
                "center ({x}, {y}) with half-extents ({half_width}, {half_height}) overflows"
            )));
        }

        Ok(Self { rect })
    }

    /// The underlying rectangle
    pub fn rect(&self) -> Rect<f64> {
        self.rect
    }

    pub fn center(&self) -> Coord<f64> {
        self.rect.center()
    }

    pub fn half_width(&self) -> f64 {
        self.rect.width() / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.rect.height() / 2.0
    }

    /// Check whether a point lies inside or on the edge of this boundary
    #[inline(always)]
    pub fn contains(&self, point: &Point) -> bool {
        self.contains_xy(point.x, point.y)
    }

    /// Check whether a coordinate pair lies inside or on the edge of this boundary
    #[inline(always)]
    pub fn contains_xy(&self, x: i32, y: i32) -> bool {
        let (x, y) = (f64::from(x), f64::from(y));
        let min = self.rect.min();
        let max = self.rect.max();
        x >= min.x && x <= max.x && y >= min.y && y <= max.y
    }

    /// Check whether two boundaries overlap or touch
    ///
    /// Separating-axis test: the rectangles are disjoint only if one lies strictly to
    /// one side of the other on some axis.
    #[inline(always)]
    pub fn intersects(&self, other: &Boundary) -> bool {
        let (min, max) = (self.rect.min(), self.rect.max());
        let (omin, omax) = (other.rect.min(), other.rect.max());
        !(min.x > omax.x || max.x < omin.x || min.y > omax.y || max.y < omin.y)
    }

    /// Boundary of one quadrant of this region
    ///
    /// Neighboring quadrants share the split line through the center, so the four of
    /// them cover the parent exactly.
    pub fn quadrant(&self, quadrant: Quadrant) -> Boundary {
        let min = self.rect.min();
        let max = self.rect.max();
        let mid = self.rect.center();

        let (min_x, max_x) = if quadrant.is_east() {
            (mid.x, max.x)
        } else {
            (min.x, mid.x)
        };
        let (min_y, max_y) = if quadrant.is_north() {
            (min.y, mid.y)
        } else {
            (mid.y, max.y)
        };

        Boundary {
            rect: Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y }),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center = self.center();
        write!(
            f,
            "({},{}) ±({},{})",
            center.x,
            center.y,
            self.half_width(),
            self.half_height()
        )
    }
}
