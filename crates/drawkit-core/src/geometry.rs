//! Geometry primitives: points, axis-aligned rectangles, and outcodes.
//!
//! Everything here is a pure value computation; no scene state is
//! involved. The clipping and windowing engines are built on these.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An axis-aligned rectangle with `min_x <= max_x` and `min_y <= max_y`.
///
/// Construct with [`Rect::from_corners`] when the corner ordering is not
/// already known; [`Rect::new`] trusts its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle from already-ordered bounds.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a rectangle from any two opposite corners, normalizing the
    /// coordinate order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// A rectangle with zero area matches nothing: not a valid clip or
    /// highlight window.
    pub fn is_degenerate(&self) -> bool {
        self.min_x == self.max_x || self.min_y == self.max_y
    }

    /// Closed containment test: points on the boundary count as inside.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Broad-phase intersection test. Returns `false` only when the two
    /// rectangles are strictly separated on at least one axis; touching
    /// edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Returns this rectangle grown by `padding` on every side.
    pub fn padded(&self, padding: f64) -> Rect {
        Rect::new(
            self.min_x - padding,
            self.min_y - padding,
            self.max_x + padding,
            self.max_y + padding,
        )
    }
}

bitflags! {
    /// 4-bit classification of a point against a rectangle's four
    /// half-planes. An empty outcode means inside or on the boundary.
    ///
    /// LEFT/RIGHT are mutually exclusive, as are BOTTOM/TOP.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const BOTTOM = 0b0100;
        const TOP = 0b1000;
    }
}

/// Computes the outcode of `p` relative to `rect`.
pub fn outcode(p: Point, rect: &Rect) -> Outcode {
    let mut code = Outcode::empty();
    if p.x < rect.min_x {
        code |= Outcode::LEFT;
    } else if p.x > rect.max_x {
        code |= Outcode::RIGHT;
    }
    if p.y < rect.min_y {
        code |= Outcode::BOTTOM;
    } else if p.y > rect.max_y {
        code |= Outcode::TOP;
    }
    code
}

/// Axis-aligned bounding box of a point sequence (min/max reduction).
///
/// Errors on an empty sequence; callers guard inert shapes first.
pub fn bbox_of(points: &[Point]) -> Result<Rect> {
    let first = points.first().ok_or(Error::EmptyPointSequence)?;
    let mut rect = Rect::new(first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        rect.min_x = rect.min_x.min(p.x);
        rect.min_y = rect.min_y.min(p.y);
        rect.max_x = rect.max_x.max(p.x);
        rect.max_y = rect.max_y.max(p.y);
    }
    Ok(rect)
}
