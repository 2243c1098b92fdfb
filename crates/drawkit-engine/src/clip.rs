//! Line and polygon clipping against axis-aligned rectangles.
//!
//! Two classic algorithms: Cohen-Sutherland for segments and
//! Sutherland-Hodgman for polygons, plus the per-shape dispatch used by
//! the scene-wide clip operation. The functions here are pure; the scene
//! rewrite lives on [`Canvas`](crate::canvas::Canvas).

use crate::shapes::{Shape, ShapeKind};
use drawkit_core::geometry::{outcode, Outcode, Point, Rect};
use smallvec::SmallVec;

/// Clips the segment `p1..p2` against `rect` using Cohen-Sutherland.
///
/// Returns the surviving sub-segment, or `None` when the segment lies
/// entirely outside. A segment fully inside is returned exactly as
/// given. A zero-length segment degenerates gracefully: both outcodes
/// are equal, so it is accepted as a point when inside the window and
/// rejected otherwise.
pub fn clip_segment(mut p1: Point, mut p2: Point, rect: &Rect) -> Option<(Point, Point)> {
    let mut code1 = outcode(p1, rect);
    let mut code2 = outcode(p2, rect);

    loop {
        if (code1 | code2).is_empty() {
            // Trivial accept: both endpoints inside.
            return Some((p1, p2));
        }
        if !(code1 & code2).is_empty() {
            // Trivial reject: both endpoints outside on the same side.
            return None;
        }

        let out = if !code1.is_empty() { code1 } else { code2 };

        // Boundary priority is fixed at TOP > BOTTOM > RIGHT > LEFT. For an
        // endpoint outside on two sides at once this tie-break decides which
        // boundary is hit first, so changing the order changes the output.
        //
        // The owning outcode bit guarantees a nonzero denominator below:
        // this endpoint is strictly past the boundary and the other one is
        // not, otherwise the pair would have been trivially rejected.
        let crossing = if out.contains(Outcode::TOP) {
            Point::new(
                p1.x + (p2.x - p1.x) * (rect.max_y - p1.y) / (p2.y - p1.y),
                rect.max_y,
            )
        } else if out.contains(Outcode::BOTTOM) {
            Point::new(
                p1.x + (p2.x - p1.x) * (rect.min_y - p1.y) / (p2.y - p1.y),
                rect.min_y,
            )
        } else if out.contains(Outcode::RIGHT) {
            Point::new(
                rect.max_x,
                p1.y + (p2.y - p1.y) * (rect.max_x - p1.x) / (p2.x - p1.x),
            )
        } else {
            Point::new(
                rect.min_x,
                p1.y + (p2.y - p1.y) * (rect.min_x - p1.x) / (p2.x - p1.x),
            )
        };

        if out == code1 {
            p1 = crossing;
            code1 = outcode(p1, rect);
        } else {
            p2 = crossing;
            code2 = outcode(p2, rect);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn coord(&self, p: Point) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Which side of a boundary counts as inside.
#[derive(Debug, Clone, Copy)]
enum Sense {
    LessEq,
    GreaterEq,
}

impl Sense {
    fn inside(&self, coord: f64, bound: f64) -> bool {
        match self {
            Sense::LessEq => coord <= bound,
            Sense::GreaterEq => coord >= bound,
        }
    }
}

type VertexBuf = SmallVec<[Point; 8]>;

/// Intersection of the edge `p1..p2` with the line `axis = bound`.
fn boundary_crossing(p1: Point, p2: Point, axis: Axis, bound: f64) -> Point {
    let c1 = axis.coord(p1);
    let c2 = axis.coord(p2);
    let t = (bound - c1) / (c2 - c1);
    match axis {
        Axis::X => Point::new(bound, p1.y + (p2.y - p1.y) * t),
        Axis::Y => Point::new(p1.x + (p2.x - p1.x) * t, bound),
    }
}

/// One Sutherland-Hodgman half-plane pass.
///
/// Walks the polygon's edges with last-to-first wraparound, applying the
/// four keep rules. Edges parallel to the boundary (equal coordinates on
/// the clip axis) contribute no crossing point.
fn clip_half_plane(input: &[Point], axis: Axis, bound: f64, sense: Sense) -> VertexBuf {
    let mut output = VertexBuf::new();
    let Some(&last) = input.last() else {
        return output;
    };

    let mut prev = last;
    for &curr in input {
        let prev_coord = axis.coord(prev);
        let curr_coord = axis.coord(curr);
        let prev_inside = sense.inside(prev_coord, bound);
        let curr_inside = sense.inside(curr_coord, bound);

        if prev_inside && curr_inside {
            output.push(curr);
        } else if prev_inside && !curr_inside {
            if curr_coord != prev_coord {
                output.push(boundary_crossing(prev, curr, axis, bound));
            }
        } else if !prev_inside && curr_inside {
            if curr_coord != prev_coord {
                output.push(boundary_crossing(prev, curr, axis, bound));
            }
            output.push(curr);
        }
        // Both outside: keep nothing.

        prev = curr;
    }
    output
}

/// Clips a polygon against `rect` using Sutherland-Hodgman.
///
/// Four sequential half-plane passes in the order left, right, bottom,
/// top. The order does not matter for an axis-aligned rectangle but is
/// kept deterministic. An empty intermediate result short-circuits.
pub fn clip_polygon(points: &[Point], rect: &Rect) -> Vec<Point> {
    let passes = [
        (Axis::X, rect.min_x, Sense::GreaterEq),
        (Axis::X, rect.max_x, Sense::LessEq),
        (Axis::Y, rect.max_y, Sense::LessEq),
        (Axis::Y, rect.min_y, Sense::GreaterEq),
    ];

    let mut output: VertexBuf = SmallVec::from_slice(points);
    for (axis, bound, sense) in passes {
        if output.is_empty() {
            break;
        }
        output = clip_half_plane(&output, axis, bound, sense);
    }
    output.into_vec()
}

/// Clips one shape against `window`, producing its replacements.
///
/// - Shapes whose bounding box misses the window pass through unchanged.
/// - A point survives iff it lies inside the closed window.
/// - A two-point polyline is clipped as a single segment.
/// - A longer polyline clips each consecutive pair independently; every
///   surviving sub-segment becomes its own shape with the original style,
///   so one polyline can split into several disjoint shapes.
/// - Rectangle and ellipse polygons are clipped wholesale; the vertex
///   count may change, and only an empty result drops the shape.
///
/// Inert shapes are removed (empty output).
pub fn clip_shape(shape: &Shape, window: &Rect) -> Vec<Shape> {
    let Ok(bbox) = shape.bbox() else {
        return Vec::new();
    };
    if !bbox.intersects(window) {
        return vec![shape.clone()];
    }

    match shape.kind {
        ShapeKind::Point => {
            if window.contains_point(shape.points[0]) {
                vec![shape.clone()]
            } else {
                Vec::new()
            }
        }
        ShapeKind::Polyline if shape.points.len() == 2 => {
            match clip_segment(shape.points[0], shape.points[1], window) {
                Some((a, b)) => {
                    let mut clipped = shape.clone();
                    clipped.points = vec![a, b];
                    vec![clipped]
                }
                None => Vec::new(),
            }
        }
        ShapeKind::Polyline => shape
            .points
            .windows(2)
            .filter_map(|pair| clip_segment(pair[0], pair[1], window))
            .map(|(a, b)| {
                let mut segment = shape.clone();
                segment.points = vec![a, b];
                segment
            })
            .collect(),
        ShapeKind::Rectangle | ShapeKind::Ellipse => {
            let clipped = clip_polygon(&shape.points, window);
            if clipped.is_empty() {
                Vec::new()
            } else {
                let mut replaced = shape.clone();
                replaced.points = clipped;
                vec![replaced]
            }
        }
    }
}
