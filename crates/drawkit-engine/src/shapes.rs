//! Shape model: the drawable entities of a scene and their creation rules.

use drawkit_core::constants::{ELLIPSE_SEGMENTS, MIN_EXTENT};
use drawkit_core::geometry::{bbox_of, Point, Rect};
use drawkit_core::{Color, Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Kinds of shapes that can live in a scene.
///
/// Rectangles and ellipses are stored as closed polygons (the ellipse as a
/// fixed-resolution N-gon), so every kind reduces to a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Polyline,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

/// The style a shape is created with, snapshotted from the canvas state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub filled: bool,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::Black,
            stroke_width: drawkit_core::constants::DEFAULT_STROKE_WIDTH,
            filled: false,
        }
    }
}

/// One drawn entity.
///
/// `stroke_color` is the user-chosen color and is never touched by the
/// windowing engine; `display_color` is what the host renders and is
/// overwritten while a highlight window is active. The two are equal
/// whenever no window is active.
///
/// `rotation_angle` is the running total of applied rotation in radians.
/// It is informational only: point positions are never re-derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub points: Vec<Point>,
    pub stroke_color: Color,
    pub display_color: Color,
    pub stroke_width: f64,
    pub filled: bool,
    pub rotation_angle: f64,
}

impl Shape {
    fn with_style(kind: ShapeKind, points: Vec<Point>, style: ShapeStyle) -> Self {
        Self {
            kind,
            points,
            stroke_color: style.stroke_color,
            display_color: style.stroke_color,
            stroke_width: style.stroke_width,
            filled: style.filled,
            rotation_angle: 0.0,
        }
    }

    /// Creates a point shape.
    pub fn point(p: Point, style: ShapeStyle) -> Self {
        Self::with_style(ShapeKind::Point, vec![p], style)
    }

    /// Creates a polyline from points in stroke order.
    ///
    /// A freehand pencil trace and a two-point line both land here; they
    /// differ only in point count. Fewer than two points is an error the
    /// host is expected to ignore (an aborted drag).
    pub fn polyline(points: Vec<Point>, style: ShapeStyle) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::InsufficientPoints {
                kind: ShapeKind::Polyline.name(),
                needed: 2,
                got: points.len(),
            });
        }
        Ok(Self::with_style(ShapeKind::Polyline, points, style))
    }

    /// Creates a rectangle from two opposite drag corners.
    ///
    /// Stored as its four corners in a consistent winding; a zero width or
    /// height is coerced to the minimum extent so the polygon never
    /// collapses at creation.
    pub fn rectangle(a: Point, b: Point, style: ShapeStyle) -> Self {
        let r = Rect::from_corners(a, b);
        let max_x = if r.width() < MIN_EXTENT {
            r.min_x + MIN_EXTENT
        } else {
            r.max_x
        };
        let max_y = if r.height() < MIN_EXTENT {
            r.min_y + MIN_EXTENT
        } else {
            r.max_y
        };
        let corners = vec![
            Point::new(r.min_x, r.min_y),
            Point::new(max_x, r.min_y),
            Point::new(max_x, max_y),
            Point::new(r.min_x, max_y),
        ];
        Self::with_style(ShapeKind::Rectangle, corners, style)
    }

    /// Creates an ellipse from two opposite drag corners, approximated as
    /// an N-gon generated once at creation.
    ///
    /// The vertex list is open: the polygon wraps last-to-first rather
    /// than repeating its first vertex. Zero radii are coerced to the
    /// minimum extent.
    pub fn ellipse(a: Point, b: Point, style: ShapeStyle) -> Self {
        let center = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        let radius_x = ((b.x - a.x).abs() / 2.0).max(MIN_EXTENT);
        let radius_y = ((b.y - a.y).abs() / 2.0).max(MIN_EXTENT);
        let points = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = (i as f64 / ELLIPSE_SEGMENTS as f64) * TAU;
                Point::new(
                    center.x + radius_x * angle.cos(),
                    center.y + radius_y * angle.sin(),
                )
            })
            .collect();
        Self::with_style(ShapeKind::Ellipse, points, style)
    }

    /// A shape with no points is inert: never rendered, never selectable,
    /// removed outright by the next scene rewrite.
    pub fn is_inert(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of the shape's points; the pivot for rotation and
    /// scaling. Returns the origin for an inert shape.
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::new(0.0, 0.0);
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Axis-aligned bounding box of the shape's points.
    pub fn bbox(&self) -> Result<Rect> {
        bbox_of(&self.points)
    }

    /// The shape's current style, in creation form.
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            filled: self.filled,
        }
    }
}
