//! Stroke accumulation and the drawing snapshot handed to hosts.

use serde::{Deserialize, Serialize};

use crate::{CurvePath, Point, PointBuffer, SignatureError, SignatureResult};

/// Snapshot of everything drawn so far.
///
/// Finalized strokes come first in the order they were completed, followed by
/// the stroke still under the finger, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    paths: Vec<CurvePath>,
}

impl Drawing {
    /// Create a drawing from paths in stroke order.
    #[must_use]
    pub fn new(paths: Vec<CurvePath>) -> Self {
        Self { paths }
    }

    /// One path per stroke, in stroke order.
    #[must_use]
    pub fn paths(&self) -> &[CurvePath] {
        &self.paths
    }

    /// Number of strokes, including the one in progress.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All strokes as a single SVG path data string.
    ///
    /// Each stroke starts with its own move-to, so joining them with a space
    /// keeps them independent.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        self.paths
            .iter()
            .filter(|p| !p.is_empty())
            .map(CurvePath::to_svg_data)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize the drawing to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> SignatureResult<String> {
        serde_json::to_string(self).map_err(SignatureError::Serialization)
    }

    /// Deserialize a drawing from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> SignatureResult<Self> {
        serde_json::from_str(json).map_err(SignatureError::Serialization)
    }
}

/// Owns finalized strokes and the stroke being drawn.
///
/// The in-progress path is rebuilt from every buffered sample on each update,
/// so it is always a complete path on its own.
#[derive(Debug, Clone, Default)]
pub struct StrokeAccumulator {
    buffer: PointBuffer,
    finalized: Vec<CurvePath>,
    current: Option<CurvePath>,
}

impl StrokeAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a stroke at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidPoint`] for a NaN or infinite
    /// coordinate, or [`SignatureError::StrokeAlreadyActive`] if the previous
    /// stroke has not ended. Existing state is kept as is.
    pub fn on_stroke_start(&mut self, point: Point) -> SignatureResult<()> {
        check_point(point)?;
        if let Err(e) = self.buffer.begin(point) {
            tracing::warn!("Rejected stroke start at ({point}): {e}");
            return Err(e);
        }
        self.current = Some(CurvePath::from_points(self.buffer.points()));
        tracing::debug!("Stroke {} started at ({point})", self.finalized.len());
        Ok(())
    }

    /// Add `point` to the active stroke.
    ///
    /// Returns `Ok(false)` if no stroke is active, in which case nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidPoint`] for a NaN or infinite
    /// coordinate. The active stroke is left as it was.
    pub fn on_stroke_update(&mut self, point: Point) -> SignatureResult<bool> {
        check_point(point)?;
        if !self.buffer.append(point) {
            tracing::trace!("Ignoring update at ({point}) with no active stroke");
            return Ok(false);
        }
        self.current = Some(CurvePath::from_points(self.buffer.points()));
        tracing::trace!("Stroke update ({point}), {} points", self.buffer.len());
        Ok(true)
    }

    /// Finalize the active stroke.
    ///
    /// Returns `false` if there was nothing to finalize.
    pub fn on_stroke_end(&mut self) -> bool {
        self.finalize("ended")
    }

    /// Finalize the active stroke after the platform cancelled the contact.
    ///
    /// The partial stroke is kept, exactly as with [`Self::on_stroke_end`].
    pub fn on_stroke_cancel(&mut self) -> bool {
        self.finalize("cancelled")
    }

    /// Discard every stroke, including the one in progress.
    pub fn reset(&mut self) {
        self.buffer.drain();
        self.current = None;
        let discarded = std::mem::take(&mut self.finalized).len();
        tracing::debug!("Drawing reset, {discarded} strokes discarded");
    }

    /// Snapshot of the finalized strokes followed by the active one.
    #[must_use]
    pub fn drawing(&self) -> Drawing {
        let paths = self
            .finalized
            .iter()
            .chain(self.current.as_ref())
            .cloned()
            .collect();
        Drawing::new(paths)
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.buffer.is_active()
    }

    /// Number of completed strokes.
    #[must_use]
    pub fn finalized_count(&self) -> usize {
        self.finalized.len()
    }

    fn finalize(&mut self, how: &str) -> bool {
        if !self.buffer.is_active() {
            tracing::trace!("Ignoring stroke {how} with no active stroke");
            return false;
        }
        let points = self.buffer.drain();
        self.current = None;
        if points.is_empty() {
            return false;
        }
        self.finalized.push(CurvePath::from_points(&points));
        tracing::debug!(
            "Stroke {} {how} with {} points",
            self.finalized.len() - 1,
            points.len()
        );
        true
    }
}

/// Non-finite samples would print as `NaN`/`inf` in path data and as `null`
/// in JSON, so they never enter the buffer.
fn check_point(point: Point) -> SignatureResult<()> {
    if point.is_finite() {
        Ok(())
    } else {
        tracing::warn!("Rejected non-finite point ({point})");
        Err(SignatureError::InvalidPoint(point.to_string()))
    }
}
