//! Transform and clipping operations on the canvas.
//!
//! Transforms act only on the current selection and only while a drag is
//! active; anything else is a silent no-op. Clipping rewrites the whole
//! scene.

use super::Canvas;
use crate::clip::clip_shape;
use crate::shapes::{Shape, ShapeKind};
use crate::transform::{
    rotate_points, rotation_delta, scale_factor_from_drag, scale_points, translate_points,
};
use crate::windowing::apply_highlight;
use drawkit_core::constants::MIN_STROKE_WIDTH;
use drawkit_core::geometry::{Point, Rect};
use tracing::{debug, info};

impl Canvas {
    /// Starts a transform drag at `point`. Subsequent incremental deltas
    /// are applied strictly in arrival order.
    pub fn begin_drag(&mut self, point: Point) {
        self.drag_anchor = Some(point);
    }

    /// Ends the current drag, if any.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Translates the selected shape by `(dx, dy)`.
    pub fn apply_translate(&mut self, dx: f64, dy: f64) {
        if self.drag_anchor.is_none() {
            return;
        }
        let Some(id) = self.selection.selected_id() else {
            return;
        };
        if let Some(shape) = self.shape_store.get_mut(id) {
            translate_points(&mut shape.points, dx, dy);
        }
    }

    /// Rotates the selected shape around its centroid by the change in
    /// polar angle of the pointer since the previous drag event.
    ///
    /// The pivot is the centroid recomputed fresh on every call (the
    /// points just moved), and the delta is composed incrementally; the
    /// accumulated angle is recorded on the shape but never used to
    /// re-derive positions.
    pub fn apply_rotate(&mut self, mouse_x: f64, mouse_y: f64) {
        let Some(prev) = self.drag_anchor else {
            return;
        };
        let Some(id) = self.selection.selected_id() else {
            return;
        };
        let curr = Point::new(mouse_x, mouse_y);
        if let Some(shape) = self.shape_store.get_mut(id) {
            if shape.is_inert() {
                return;
            }
            let pivot = shape.centroid();
            let delta = rotation_delta(pivot, prev, curr);
            rotate_points(&mut shape.points, pivot, delta);
            shape.rotation_angle += delta;
        }
        self.drag_anchor = Some(curr);
    }

    /// Scales the selected shape from a vertical drag delta.
    ///
    /// Point shapes scale only their stroke width; all other kinds scale
    /// every point toward the centroid with the stroke width in tandem.
    /// The width never drops below the minimum.
    pub fn apply_scale(&mut self, delta_y: f64) {
        if self.drag_anchor.is_none() {
            return;
        }
        let Some(id) = self.selection.selected_id() else {
            return;
        };
        let factor = scale_factor_from_drag(delta_y);
        if let Some(shape) = self.shape_store.get_mut(id) {
            if shape.kind != ShapeKind::Point {
                let pivot = shape.centroid();
                scale_points(&mut shape.points, pivot, factor);
            }
            shape.stroke_width = (shape.stroke_width * factor).max(MIN_STROKE_WIDTH);
        }
    }

    /// Permanently clips the scene against `window`.
    ///
    /// Shapes whose bounding box misses the window pass through
    /// unchanged; the rest are cut by Cohen-Sutherland (segments) or
    /// Sutherland-Hodgman (polygons). A polyline can split into several
    /// shapes; fully-outside shapes are dropped. Survivors keep their
    /// relative order (and their ids when they survive in one piece;
    /// split pieces get fresh ids). The selection is cleared
    /// unconditionally and highlight membership is recomputed.
    ///
    /// A degenerate (zero-area) window matches nothing and is a no-op.
    pub fn clip_scene(&mut self, window: Rect) {
        if window.is_degenerate() {
            debug!("Ignoring degenerate clip window");
            return;
        }

        let before = self.shape_store.len();
        info!("Clipping {} shapes against window", before);

        let mut clipped: Vec<(u64, Vec<Shape>)> = Vec::with_capacity(before);
        for (id, shape) in self.shape_store.iter() {
            clipped.push((id, clip_shape(shape, &window)));
        }

        let mut entries: Vec<(u64, Shape)> = Vec::with_capacity(before);
        for (id, mut results) in clipped {
            if results.len() == 1 {
                entries.push((id, results.remove(0)));
            } else {
                for shape in results {
                    let fresh_id = self.shape_store.generate_id();
                    entries.push((fresh_id, shape));
                }
            }
        }

        self.shape_store.replace_all(entries);
        self.selection.clear();
        let highlight = self.highlight_window();
        apply_highlight(&mut self.shape_store, highlight.as_ref());

        info!("Clip kept {} of {} shapes", self.shape_store.len(), before);
    }
}
