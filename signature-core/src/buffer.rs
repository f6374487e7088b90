//! Sample storage for the stroke currently being drawn.

use crate::{Point, SignatureError, SignatureResult};

/// Ordered touch samples of the active stroke.
///
/// Samples are kept exactly as they arrive: no deduplication, no filtering.
#[derive(Debug, Clone, Default)]
pub struct PointBuffer {
    points: Vec<Point>,
    active: bool,
}

impl PointBuffer {
    /// Create an idle, empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke with `point` as its only sample.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::StrokeAlreadyActive`] if a stroke has not been
    /// drained yet. The buffered samples are left untouched in that case.
    pub fn begin(&mut self, point: Point) -> SignatureResult<()> {
        if self.active {
            return Err(SignatureError::StrokeAlreadyActive);
        }
        self.points.clear();
        self.points.push(point);
        self.active = true;
        Ok(())
    }

    /// Append a sample to the active stroke.
    ///
    /// Returns `false` without recording anything when no stroke is active;
    /// platforms can deliver a move before the matching start.
    pub fn append(&mut self, point: Point) -> bool {
        if !self.active {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Take the buffered samples and end the active stroke.
    pub fn drain(&mut self) -> Vec<Point> {
        self.active = false;
        std::mem::take(&mut self.points)
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Samples of the active stroke, oldest first.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of buffered samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no samples are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
