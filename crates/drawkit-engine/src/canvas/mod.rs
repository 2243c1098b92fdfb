//! Canvas: the host-facing facade over the scene engine.
//!
//! The host feeds finished gestures in (shape creation, drag deltas,
//! clip rectangles) and enumerates shapes back out for rendering. All
//! operations are synchronous and run to completion; the engine expects
//! a single control thread.

mod operations;
mod types;

pub use types::{CanvasMode, DrawingTool, StatusSnapshot, TransformMode};

use crate::render::{HandleMap, RenderHandle, RenderSurface};
use crate::selection::SelectionManager;
use crate::shape_store::ShapeStore;
use crate::shapes::{Shape, ShapeKind, ShapeStyle};
use crate::windowing::apply_highlight;
use drawkit_core::constants::{
    DEFAULT_STROKE_WIDTH, HIT_TOLERANCE, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH,
};
use drawkit_core::geometry::{Point, Rect};
use drawkit_core::{Color, Error, Result};
use tracing::{debug, info};

/// Canvas state: the scene, its selection, the active highlight window,
/// and the tool/style state the host toolbar manipulates.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub(crate) shape_store: ShapeStore,
    pub(crate) selection: SelectionManager,
    handle_map: HandleMap,
    mode: CanvasMode,
    highlight_window: Option<Rect>,
    draw_color: Color,
    stroke_width: f64,
    fill_shapes: bool,
    pub(crate) drag_anchor: Option<Point>,
}

impl Canvas {
    /// Creates a canvas with the default style (black pencil, width 5,
    /// no fill).
    pub fn new() -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection: SelectionManager::new(),
            handle_map: HandleMap::new(),
            mode: CanvasMode::Tool(DrawingTool::Pencil),
            highlight_window: None,
            draw_color: Color::Black,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_shapes: false,
            drag_anchor: None,
        }
    }

    /// Activates a drawing tool, leaving any transform mode. Clears the
    /// selection and any in-progress drag.
    pub fn set_tool(&mut self, tool: DrawingTool) {
        self.mode = CanvasMode::Tool(tool);
        self.drag_anchor = None;
        self.unselect();
    }

    /// Activates a transform mode, leaving any drawing tool. Entering
    /// Select, Window, or Clip clears the selection.
    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.mode = CanvasMode::Transform(mode);
        self.drag_anchor = None;
        if matches!(
            mode,
            TransformMode::Select | TransformMode::Window | TransformMode::Clip
        ) {
            self.unselect();
        }
    }

    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    /// Sets the stroke width for new shapes, clamped to the brush range.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    pub fn set_fill_shapes(&mut self, fill: bool) {
        self.fill_shapes = fill;
    }

    fn current_style(&self) -> ShapeStyle {
        ShapeStyle {
            stroke_color: self.draw_color,
            stroke_width: self.stroke_width,
            filled: self.fill_shapes,
        }
    }

    /// Creates a shape from a finished gesture's raw points, using the
    /// current style, and appends it to the scene.
    ///
    /// Rectangle and ellipse take two opposite drag corners; a polyline
    /// takes the stroke's points in order; a point takes one point.
    /// Degenerate extents are coerced at construction, so the only error
    /// is an arity mismatch (e.g. an aborted one-point pencil stroke).
    pub fn create_shape(&mut self, kind: ShapeKind, points: Vec<Point>) -> Result<u64> {
        let style = self.current_style();
        let shape = match kind {
            ShapeKind::Point => {
                let p = *points.first().ok_or(Error::InsufficientPoints {
                    kind: kind.name(),
                    needed: 1,
                    got: 0,
                })?;
                Shape::point(p, style)
            }
            ShapeKind::Polyline => Shape::polyline(points, style)?,
            ShapeKind::Rectangle | ShapeKind::Ellipse => {
                if points.len() < 2 {
                    return Err(Error::InsufficientPoints {
                        kind: kind.name(),
                        needed: 2,
                        got: points.len(),
                    });
                }
                if kind == ShapeKind::Rectangle {
                    Shape::rectangle(points[0], points[1], style)
                } else {
                    Shape::ellipse(points[0], points[1], style)
                }
            }
        };

        let id = self.shape_store.generate_id();
        debug!("Created {} shape {}", kind.name(), id);
        self.shape_store.insert(id, shape);
        // Membership may have changed under an active window.
        apply_highlight(&mut self.shape_store, self.highlight_window.as_ref());
        Ok(id)
    }

    /// Number of shapes in the scene.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    /// Gets a shape by id.
    pub fn get_shape(&self, id: u64) -> Option<&Shape> {
        self.shape_store.get(id)
    }

    /// Draw-ordered `(id, shape)` pairs for rendering. Inert shapes are
    /// skipped; the host renders kind, points, display color, width, and
    /// fill.
    pub fn enumerate_shapes(&self) -> impl Iterator<Item = (u64, &Shape)> {
        self.shape_store.iter().filter(|(_, s)| !s.is_inert())
    }

    /// Starts a render pass: all previous handle bindings are dropped.
    pub fn begin_render_pass(&mut self) {
        self.handle_map.clear();
    }

    /// Binds a host render handle to the shape it was drawn for. Valid
    /// until the next `begin_render_pass`.
    pub fn bind_handle(&mut self, id: u64, handle: RenderHandle) {
        if self.shape_store.get(id).is_some() {
            self.handle_map.bind(handle, id);
        }
    }

    /// Picks the shape nearest to `point` via the host surface and makes
    /// it the selection. Overlapping shapes resolve to the item the host
    /// drew topmost. Also seeds the drag anchor, like any transform-mode
    /// press. Returns the selected id, if any.
    pub fn begin_select(&mut self, point: Point, surface: &dyn RenderSurface) -> Option<u64> {
        self.drag_anchor = Some(point);
        self.selection.clear();

        let handle = surface.nearest_handle(point, HIT_TOLERANCE)?;
        let id = self.handle_map.shape_for(handle)?;
        let shape = self.shape_store.get(id)?;
        if shape.is_inert() {
            return None;
        }
        self.selection.select(id);
        Some(id)
    }

    /// Selects a shape by id directly, bypassing the render surface
    /// (e.g. host-driven selection of a just-created shape). Returns
    /// whether the id resolved to a selectable shape.
    pub fn select_shape(&mut self, id: u64) -> bool {
        match self.shape_store.get(id) {
            Some(shape) if !shape.is_inert() => {
                self.selection.select(id);
                true
            }
            _ => false,
        }
    }

    /// Clears the selection and its decoration.
    pub fn unselect(&mut self) {
        self.selection.clear();
    }

    /// Id of the selected shape, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selection.selected_id()
    }

    /// The padded decoration rectangle around the selected shape, if any.
    pub fn current_selection_bbox(&self) -> Option<Rect> {
        self.selection.decoration_bbox(&self.shape_store)
    }

    /// Sets or clears the non-destructive highlight window and recolors
    /// the scene accordingly. A degenerate (zero-area) rectangle matches
    /// nothing and is treated as no window.
    pub fn set_highlight_window(&mut self, window: Option<Rect>) {
        self.highlight_window = match window {
            Some(w) if w.is_degenerate() => {
                debug!("Ignoring degenerate highlight window");
                None
            }
            other => other,
        };
        apply_highlight(&mut self.shape_store, self.highlight_window.as_ref());
    }

    /// The active highlight window, if any.
    pub fn highlight_window(&self) -> Option<Rect> {
        self.highlight_window
    }

    /// Empties the scene: all shapes, the selection, and the highlight
    /// window. A previously performed destructive clip stays performed.
    pub fn clear_scene(&mut self) {
        info!("Clearing scene ({} shapes)", self.shape_store.len());
        self.shape_store.clear();
        self.selection.clear();
        self.highlight_window = None;
        self.handle_map.clear();
        self.drag_anchor = None;
    }

    /// Snapshot of canvas state for the host's status display.
    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            mode: self.mode(),
            window_active: self.highlight_window.is_some(),
            color: self.draw_color,
            stroke_width: self.stroke_width,
            fill: self.fill_shapes,
            selected_kind: self
                .selection
                .selected_id()
                .and_then(|id| self.shape_store.get(id))
                .map(|s| s.kind),
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
