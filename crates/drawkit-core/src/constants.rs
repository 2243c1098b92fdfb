//! Engine-wide tuning constants.

use crate::color::Color;

/// Number of segments used to approximate an ellipse as a polygon.
///
/// The polygon is generated once at creation time and never regenerated,
/// so transforms operate on these vertices directly.
pub const ELLIPSE_SEGMENTS: usize = 60;

/// Minimum extent substituted for a zero width, height, or radius when a
/// rectangle or ellipse is created from a degenerate drag.
pub const MIN_EXTENT: f64 = 0.01;

/// Smallest stroke width any operation can produce.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Largest stroke width accepted from the host (the brush slider range).
pub const MAX_STROKE_WIDTH: f64 = 20.0;

/// Default stroke width for a fresh canvas.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Pixel tolerance handed to the host's nearest-item pick.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Padding added on every side of the selection decoration rectangle.
pub const SELECTION_PADDING: f64 = 5.0;

/// Color applied to shapes intersecting the active highlight window.
pub const HIGHLIGHT_COLOR: Color = Color::Red;

/// Floor for the drag-derived scale factor.
pub const MIN_SCALE_FACTOR: f64 = 0.01;

/// Vertical drag distance, in pixels, that changes the scale by 100%.
pub const SCALE_DRAG_DIVISOR: f64 = 100.0;
