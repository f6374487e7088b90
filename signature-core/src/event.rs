//! Pointer input for the drawing surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{SignatureError, SignatureResult};

/// A position in the drawing surface's local coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position in surface coordinates.
    pub x: f32,
    /// Y position in surface coordinates.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The point halfway between `a` and `b`.
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// Touch started (finger down).
    #[serde(alias = "began", alias = "down")]
    Start,
    /// Touch moved (finger dragging).
    #[serde(alias = "moved")]
    Move,
    /// Touch ended (finger up).
    #[serde(alias = "ended", alias = "up")]
    End,
    /// Touch cancelled (e.g., palm rejection or the system took the gesture).
    #[serde(alias = "cancelled", alias = "canceled")]
    Cancel,
}

impl FromStr for TouchPhase {
    type Err = SignatureError;

    fn from_str(s: &str) -> SignatureResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "start" | "began" | "down" => Ok(Self::Start),
            "move" | "moved" => Ok(Self::Move),
            "end" | "ended" | "up" => Ok(Self::End),
            "cancel" | "cancelled" | "canceled" => Ok(Self::Cancel),
            _ => Err(SignatureError::InvalidPhase(s.to_string())),
        }
    }
}

/// A single pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this event.
    pub phase: TouchPhase,
    /// X position in surface coordinates.
    pub x: f32,
    /// Y position in surface coordinates.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    /// Finger down at `(x, y)`.
    #[must_use]
    pub const fn start(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Start, x, y)
    }

    /// Finger dragged to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Move, x, y)
    }

    /// Finger lifted at `(x, y)`.
    #[must_use]
    pub const fn end(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::End, x, y)
    }

    /// Contact cancelled at `(x, y)`.
    #[must_use]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Cancel, x, y)
    }

    /// The sampled position.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
