//! Quadratic smoothing of raw touch samples.
//!
//! Each new sample bends the path towards it without passing through it: the
//! previous sample acts as the control point and the midpoint between the two
//! samples is the segment's end. The resulting curve rounds off the jitter of
//! a finger while staying close to every sample.
//!
//! ```text
//! p0        p1          p2
//!  M ─ Q(p0 → m01) ─ Q(p1 → m12)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;

/// A single vector drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum PathCommand {
    /// Move the pen without drawing.
    MoveTo {
        /// Destination.
        to: Point,
    },
    /// Quadratic Bézier curve from the current pen position.
    QuadraticCurveTo {
        /// Control point the curve bends towards.
        control: Point,
        /// Destination.
        to: Point,
    },
}

impl PathCommand {
    /// Where the pen ends up after this command.
    #[must_use]
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo { to } | Self::QuadraticCurveTo { to, .. } => to,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo { to } => write!(f, "M{to}"),
            Self::QuadraticCurveTo { control, to } => write!(f, "Q{control} {to}"),
        }
    }
}

/// The smoothed command sequence for one stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    commands: Vec<PathCommand>,
}

impl CurvePath {
    /// Build the path for `points` from scratch.
    ///
    /// - no points: empty path
    /// - one point: a lone move-to (a tap)
    /// - `n` points: one move-to followed by `n - 1` quadratic segments
    ///
    /// Repeated samples are kept and yield zero-length segments.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let Some(&first) = points.first() else {
            return Self::default();
        };

        let mut commands = Vec::with_capacity(points.len());
        commands.push(PathCommand::MoveTo { to: first });
        commands.extend(points.windows(2).map(|pair| PathCommand::QuadraticCurveTo {
            control: pair[0],
            to: Point::midpoint(pair[0], pair[1]),
        }));

        Self { commands }
    }

    /// Drawing commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of quadratic segments.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadraticCurveTo { .. }))
            .count()
    }

    /// Whether the path has no commands at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG path data (`d` attribute) for this path, e.g. `M0,0 Q0,0 5,0`.
    #[must_use]
    pub fn to_svg_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CurvePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
