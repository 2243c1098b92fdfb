//! Non-destructive highlight of shapes intersecting a window.
//!
//! Highlight membership is derived state: it is recomputed from scratch
//! against the current window after every mutation that could change it,
//! never stored independently.

use crate::shape_store::ShapeStore;
use drawkit_core::constants::HIGHLIGHT_COLOR;
use drawkit_core::geometry::Rect;

/// Recolors every shape according to the active highlight window.
///
/// With a window active, shapes whose bounding box intersects it get the
/// highlight color; all others are restored to their stroke color. With
/// no window, every shape is restored. The test is broad-phase (bounding
/// box), so a concave shape skirting the window can highlight without
/// touching it; an accepted over-approximation.
pub fn apply_highlight(store: &mut ShapeStore, window: Option<&Rect>) {
    store.for_each_mut(|_, shape| {
        let highlighted = match window {
            Some(w) => shape
                .bbox()
                .map(|bbox| bbox.intersects(w))
                .unwrap_or(false),
            None => false,
        };
        shape.display_color = if highlighted {
            HIGHLIGHT_COLOR
        } else {
            shape.stroke_color
        };
    });
}
