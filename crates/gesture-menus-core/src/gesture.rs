//! Gesture codes.
//!
//! Codes are stored as raw integers so documents written by newer recognizers
//! survive a load/save cycle. Only the named codes below have a meaning here,
//! and only the horizontal edge swipes have an opposite.

use serde::Serialize;
use std::fmt;

/// A gesture identifier as it appears in the `gesture` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GestureCode(pub i32);

impl GestureCode {
    pub const UP_LEFT: GestureCode = GestureCode(1);
    pub const UP: GestureCode = GestureCode(2);
    pub const UP_RIGHT: GestureCode = GestureCode(3);
    pub const LEFT: GestureCode = GestureCode(4);
    pub const CENTER: GestureCode = GestureCode(5);
    pub const RIGHT: GestureCode = GestureCode(6);
    pub const DOWN_LEFT: GestureCode = GestureCode(7);
    pub const DOWN: GestureCode = GestureCode(8);
    pub const DOWN_RIGHT: GestureCode = GestureCode(9);
    pub const EDGE_LEFT: GestureCode = GestureCode(10);
    pub const EDGE_RIGHT: GestureCode = GestureCode(11);
    pub const EDGE_UP: GestureCode = GestureCode(12);
    pub const EDGE_DOWN: GestureCode = GestureCode(13);

    /// Raw integer code.
    pub fn code(self) -> i32 {
        self.0
    }

    /// The gesture used for the back link when chaining menus.
    ///
    /// Defined for the horizontal edge swipes only.
    pub fn opposite(self) -> Option<GestureCode> {
        match self {
            GestureCode::EDGE_LEFT => Some(GestureCode::EDGE_RIGHT),
            GestureCode::EDGE_RIGHT => Some(GestureCode::EDGE_LEFT),
            _ => None,
        }
    }

    /// Display name for recognized codes.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            GestureCode::UP_LEFT => "up-left",
            GestureCode::UP => "up",
            GestureCode::UP_RIGHT => "up-right",
            GestureCode::LEFT => "left",
            GestureCode::CENTER => "center",
            GestureCode::RIGHT => "right",
            GestureCode::DOWN_LEFT => "down-left",
            GestureCode::DOWN => "down",
            GestureCode::DOWN_RIGHT => "down-right",
            GestureCode::EDGE_LEFT => "edge-left",
            GestureCode::EDGE_RIGHT => "edge-right",
            GestureCode::EDGE_UP => "edge-up",
            GestureCode::EDGE_DOWN => "edge-down",
            _ => return None,
        };
        Some(name)
    }

    /// Look up a code by its display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<GestureCode> {
        (1..=13)
            .map(GestureCode)
            .find(|g| g.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }
}

impl From<i32> for GestureCode {
    fn from(code: i32) -> Self {
        GestureCode(code)
    }
}

impl fmt::Display for GestureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
