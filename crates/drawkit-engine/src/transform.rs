//! Affine transforms applied to shape point sequences.
//!
//! All operations are incremental: rotation in particular is composed
//! from per-event delta angles rather than recomputed from an absolute
//! angle, which avoids the singularity when the pointer crosses the
//! pivot. Floating-point error accumulates over very long drags; that
//! drift is a documented property of the scheme, not corrected.

use drawkit_core::constants::{MIN_SCALE_FACTOR, SCALE_DRAG_DIVISOR};
use drawkit_core::geometry::Point;

/// Adds `(dx, dy)` to every point.
pub fn translate_points(points: &mut [Point], dx: f64, dy: f64) {
    for p in points.iter_mut() {
        p.x += dx;
        p.y += dy;
    }
}

/// Rotates every point around `pivot` by `angle` radians, using the
/// standard 2D rotation matrix.
pub fn rotate_points(points: &mut [Point], pivot: Point, angle: f64) {
    let (sin_a, cos_a) = angle.sin_cos();
    for p in points.iter_mut() {
        let dx = p.x - pivot.x;
        let dy = p.y - pivot.y;
        p.x = pivot.x + dx * cos_a - dy * sin_a;
        p.y = pivot.y + dx * sin_a + dy * cos_a;
    }
}

/// Scales every point toward (or away from) `pivot` by `factor`.
pub fn scale_points(points: &mut [Point], pivot: Point, factor: f64) {
    for p in points.iter_mut() {
        p.x = pivot.x + (p.x - pivot.x) * factor;
        p.y = pivot.y + (p.y - pivot.y) * factor;
    }
}

/// Derives a scale factor from a vertical drag delta: dragging down
/// grows, up shrinks, clamped so the factor never reaches zero.
pub fn scale_factor_from_drag(delta_y: f64) -> f64 {
    MIN_SCALE_FACTOR.max(1.0 + delta_y / SCALE_DRAG_DIVISOR)
}

/// The change in polar angle of the pointer about `pivot` between the
/// previous and current drag positions.
pub fn rotation_delta(pivot: Point, prev: Point, curr: Point) -> f64 {
    let start = (prev.y - pivot.y).atan2(prev.x - pivot.x);
    let end = (curr.y - pivot.y).atan2(curr.x - pivot.x);
    end - start
}
