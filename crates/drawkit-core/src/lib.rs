//! # DrawKit Core
//!
//! Foundation types for the DrawKit scene engine: geometry primitives
//! (points, axis-aligned rectangles, outcodes), the named color
//! vocabulary, engine-wide tuning constants, and error types.
//!
//! This crate holds no scene state. Everything here is a plain value
//! type shared between the engine and its host.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;

pub use color::{Color, PALETTE};
pub use error::{Error, Result};
pub use geometry::{bbox_of, outcode, Outcode, Point, Rect};
