//! Render-handle plumbing between the engine and the host's draw surface.
//!
//! The host owns all pixel-space rendering. Each redraw it re-binds the
//! opaque ids of its drawn items to shape ids; the binding never outlives
//! a redraw and is never part of a shape's identity.

use drawkit_core::geometry::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque identifier of one drawn item on the host's render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderHandle(pub u64);

/// The host-side pick capability: nearest drawn item to a point within a
/// tolerance. The engine never reimplements this; a canvas toolkit's
/// find-closest query (with halo) is the expected implementation.
pub trait RenderSurface {
    fn nearest_handle(&self, p: Point, tolerance: f64) -> Option<RenderHandle>;
}

/// Handle-to-shape mapping, rebuilt on every redraw.
#[derive(Debug, Clone, Default)]
pub struct HandleMap {
    bindings: HashMap<RenderHandle, u64>,
}

impl HandleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all bindings; called at the start of a render pass.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Binds a drawn item to its owning shape.
    pub fn bind(&mut self, handle: RenderHandle, shape_id: u64) {
        self.bindings.insert(handle, shape_id);
    }

    /// Resolves a handle back to its shape id.
    pub fn shape_for(&self, handle: RenderHandle) -> Option<u64> {
        self.bindings.get(&handle).copied()
    }
}
