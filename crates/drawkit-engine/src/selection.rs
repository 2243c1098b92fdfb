//! Selection state for the scene.
//!
//! At most one shape is selected at a time. The selection is an id into
//! the shape store, never a reference, so a scene rewrite invalidates it
//! by clearing rather than dangling.

use crate::shape_store::ShapeStore;
use drawkit_core::constants::SELECTION_PADDING;
use drawkit_core::geometry::Rect;

/// Tracks the selected shape, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of the selected shape.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn select(&mut self, id: u64) {
        self.selected_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// The selection decoration rectangle: the selected shape's bounding
    /// box padded on every side. Recomputed from the shape's current
    /// points, so it follows transforms. `None` when nothing is selected
    /// or the selected shape has become inert.
    pub fn decoration_bbox(&self, store: &ShapeStore) -> Option<Rect> {
        let shape = store.get(self.selected_id?)?;
        shape.bbox().ok().map(|b| b.padded(SELECTION_PADDING))
    }
}
