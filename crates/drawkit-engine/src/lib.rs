//! # DrawKit Engine
//!
//! A 2D vector-scene engine: a mutable collection of drawn shapes with
//! affine transformation of a selected shape, a non-destructive highlight
//! window, and permanent clipping of the scene against a rectangle using
//! Cohen-Sutherland (segments) and Sutherland-Hodgman (polygons).
//!
//! The engine is a library consumed by a host UI. The host owns widgets,
//! mouse capture, and pixel rendering; the engine only ever sees
//! already-resolved coordinates and rectangles in the host's coordinate
//! space.
//!
//! ## Architecture
//!
//! ```text
//! Canvas (host facade)
//!   ├── ShapeStore (insertion-ordered arena, draw order = paint order)
//!   ├── SelectionManager (at most one selected id)
//!   ├── HandleMap (per-redraw render-handle bindings)
//!   └── highlight window (derived recoloring)
//!
//! transform (translate / rotate / scale about the centroid)
//! clip (Cohen-Sutherland + Sutherland-Hodgman, scene rewrite)
//! windowing (broad-phase highlight, fully reversible)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drawkit_core::geometry::{Point, Rect};
//! use drawkit_engine::{Canvas, ShapeKind};
//!
//! let mut canvas = Canvas::new();
//! canvas
//!     .create_shape(
//!         ShapeKind::Rectangle,
//!         vec![Point::new(0.0, 0.0), Point::new(40.0, 30.0)],
//!     )
//!     .unwrap();
//!
//! // Permanently cut everything outside the window.
//! canvas.clip_scene(Rect::new(10.0, 10.0, 100.0, 100.0));
//!
//! for (_id, shape) in canvas.enumerate_shapes() {
//!     // hand kind, points, display color, width, and fill to the host
//!     let _ = (&shape.kind, &shape.points, shape.display_color);
//! }
//! ```

pub mod canvas;
pub mod clip;
pub mod render;
pub mod selection;
pub mod shape_store;
pub mod shapes;
pub mod transform;
pub mod windowing;

pub use canvas::{Canvas, CanvasMode, DrawingTool, StatusSnapshot, TransformMode};
pub use clip::{clip_polygon, clip_segment, clip_shape};
pub use render::{HandleMap, RenderHandle, RenderSurface};
pub use selection::SelectionManager;
pub use shape_store::ShapeStore;
pub use shapes::{Shape, ShapeKind, ShapeStyle};
