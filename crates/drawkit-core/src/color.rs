//! Color vocabulary shared by the engine and the host's palette UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named drawing color from the classic 16-color web palette.
///
/// The engine never interprets colors; they are carried on shapes and
/// handed back to the host verbatim for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Gray,
    Silver,
    Maroon,
    Red,
    Purple,
    Fuchsia,
    Green,
    Lime,
    Olive,
    Yellow,
    Navy,
    Blue,
    Teal,
    Aqua,
    White,
}

impl Color {
    /// CSS/Tk color name.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Gray => "gray",
            Color::Silver => "silver",
            Color::Maroon => "maroon",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Fuchsia => "fuchsia",
            Color::Green => "green",
            Color::Lime => "lime",
            Color::Olive => "olive",
            Color::Yellow => "yellow",
            Color::Navy => "navy",
            Color::Blue => "blue",
            Color::Teal => "teal",
            Color::Aqua => "aqua",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quick-pick palette offered by the host toolbar, in display order.
pub const PALETTE: [Color; 15] = [
    Color::Black,
    Color::Gray,
    Color::Silver,
    Color::Maroon,
    Color::Red,
    Color::Purple,
    Color::Fuchsia,
    Color::Green,
    Color::Lime,
    Color::Olive,
    Color::Yellow,
    Color::Navy,
    Color::Blue,
    Color::Teal,
    Color::Aqua,
];
