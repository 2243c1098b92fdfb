//! Canvas vocabulary: drawing tools, transform modes, status snapshot.

use crate::shapes::ShapeKind;
use drawkit_core::Color;
use serde::{Deserialize, Serialize};

/// Shape-creation tools the host toolbar can activate.
///
/// Pencil produces a freehand polyline, Line a two-point polyline; the
/// engine does not distinguish them beyond point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawingTool {
    Pencil,
    Point,
    Line,
    Rectangle,
    Ellipse,
}

/// Transform and windowing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformMode {
    Select,
    Translate,
    Rotate,
    Scale,
    Window,
    Clip,
}

/// Which gesture vocabulary is currently active. Exactly one of a
/// drawing tool or a transform mode is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasMode {
    Tool(DrawingTool),
    Transform(TransformMode),
}

/// Point-in-time summary of canvas state for the host's status display.
///
/// The host formats this into text; the engine only reports fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSnapshot {
    pub mode: CanvasMode,
    pub window_active: bool,
    pub color: Color,
    pub stroke_width: f64,
    pub fill: bool,
    pub selected_kind: Option<ShapeKind>,
}
