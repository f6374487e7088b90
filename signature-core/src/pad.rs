//! The signature pad: strokes, style and change notification in one place.

use crate::{
    ChangeNotifier, Drawing, DrawingListener, Point, PointerEvent, SignatureResult,
    StrokeAccumulator, StyleConfig, TouchPhase,
};

/// A drawing session driven by one pointer.
///
/// Every change to the drawing is pushed to the registered listeners before
/// the mutating call returns. Events that change nothing (a move or end with
/// no stroke in progress) are not reported.
#[derive(Debug)]
pub struct SignaturePad {
    style: StyleConfig,
    strokes: StrokeAccumulator,
    notifier: ChangeNotifier,
}

impl SignaturePad {
    /// Create an empty pad.
    ///
    /// # Errors
    ///
    /// Returns an error if `style` fails validation.
    pub fn new(style: StyleConfig) -> SignatureResult<Self> {
        style.validate()?;
        Ok(Self {
            style,
            strokes: StrokeAccumulator::new(),
            notifier: ChangeNotifier::new(),
        })
    }

    /// Register a listener for drawing changes.
    pub fn on_change(&mut self, listener: impl DrawingListener + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Route a host pointer event by its phase.
    ///
    /// Coordinates of end and cancel events are not recorded; the stroke
    /// finishes at its last move.
    ///
    /// # Errors
    ///
    /// Returns an error for a start while a stroke is active, or for a NaN or
    /// infinite coordinate on a start or move.
    pub fn handle_event(&mut self, event: &PointerEvent) -> SignatureResult<()> {
        match event.phase {
            TouchPhase::Start => self.stroke_start(event.point())?,
            TouchPhase::Move => self.stroke_update(event.point())?,
            TouchPhase::End => self.stroke_end(),
            TouchPhase::Cancel => self.stroke_cancel(),
        }
        Ok(())
    }

    /// Begin a stroke at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SignatureError::StrokeAlreadyActive`] if a stroke is
    /// in progress, or [`crate::SignatureError::InvalidPoint`] if `point` is
    /// not finite. No notification is sent in either case.
    pub fn stroke_start(&mut self, point: Point) -> SignatureResult<()> {
        self.strokes.on_stroke_start(point)?;
        self.publish();
        Ok(())
    }

    /// Extend the active stroke to `point`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SignatureError::InvalidPoint`] if `point` is not
    /// finite. The stroke stays active and no notification is sent.
    pub fn stroke_update(&mut self, point: Point) -> SignatureResult<()> {
        if self.strokes.on_stroke_update(point)? {
            self.publish();
        }
        Ok(())
    }

    /// Finish the active stroke.
    pub fn stroke_end(&mut self) {
        if self.strokes.on_stroke_end() {
            self.publish();
        }
    }

    /// Finish the active stroke after a platform cancel. The partial stroke
    /// is kept.
    pub fn stroke_cancel(&mut self) {
        if self.strokes.on_stroke_cancel() {
            self.publish();
        }
    }

    /// Clear the drawing.
    pub fn reset(&mut self) {
        self.strokes.reset();
        self.publish();
    }

    /// Current snapshot of the drawing.
    #[must_use]
    pub fn drawing(&self) -> Drawing {
        self.strokes.drawing()
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.strokes.is_drawing()
    }

    /// The session's style.
    #[must_use]
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    fn publish(&mut self) {
        if self.notifier.listener_count() == 0 {
            return;
        }
        let drawing = self.strokes.drawing();
        self.notifier.notify(&drawing);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::SignatureError;

    fn pad_with_log() -> (SignaturePad, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pad = SignaturePad::new(StyleConfig::default()).expect("valid style");
        let sink = Rc::clone(&log);
        pad.on_change(move |d: &Drawing| sink.borrow_mut().push(d.to_path_data()));
        (pad, log)
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let result = SignaturePad::new(StyleConfig::default().with_stroke_width(0.0));
        assert!(matches!(result, Err(SignatureError::InvalidStyle(_))));
    }

    #[test]
    fn test_every_update_notifies() {
        let (mut pad, log) = pad_with_log();
        pad.handle_event(&PointerEvent::start(0.0, 0.0)).unwrap();
        pad.handle_event(&PointerEvent::moved(10.0, 0.0)).unwrap();
        pad.handle_event(&PointerEvent::moved(10.0, 10.0)).unwrap();
        pad.handle_event(&PointerEvent::end(10.0, 10.0)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "M0,0".to_string(),
                "M0,0 Q0,0 5,0".to_string(),
                "M0,0 Q0,0 5,0 Q10,0 10,5".to_string(),
                "M0,0 Q0,0 5,0 Q10,0 10,5".to_string(),
            ]
        );
    }

    #[test]
    fn test_noop_events_do_not_notify() {
        let (mut pad, log) = pad_with_log();
        pad.handle_event(&PointerEvent::moved(1.0, 1.0)).unwrap();
        pad.handle_event(&PointerEvent::end(1.0, 1.0)).unwrap();
        pad.handle_event(&PointerEvent::cancel(1.0, 1.0)).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_rejected_start_does_not_notify() {
        let (mut pad, log) = pad_with_log();
        pad.handle_event(&PointerEvent::start(0.0, 0.0)).unwrap();
        let result = pad.handle_event(&PointerEvent::start(5.0, 5.0));

        assert!(matches!(result, Err(SignatureError::StrokeAlreadyActive)));
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(pad.drawing().to_path_data(), "M0,0");
    }

    #[test]
    fn test_reset_notifies_empty_drawing() {
        let (mut pad, log) = pad_with_log();
        pad.handle_event(&PointerEvent::start(2.0, 2.0)).unwrap();
        pad.handle_event(&PointerEvent::end(2.0, 2.0)).unwrap();
        pad.reset();

        assert_eq!(log.borrow().last().map(String::as_str), Some(""));
        assert!(pad.drawing().is_empty());
    }

    #[test]
    fn test_style_is_kept() {
        let style = StyleConfig::default().with_stroke_color("navy");
        let pad = SignaturePad::new(style.clone()).unwrap();
        assert_eq!(pad.style(), &style);
        assert!(!pad.is_drawing());
    }

    #[test]
    fn test_non_finite_move_is_rejected_without_notifying() {
        let (mut pad, log) = pad_with_log();
        pad.handle_event(&PointerEvent::start(0.0, 0.0)).unwrap();
        let result = pad.handle_event(&PointerEvent::moved(f32::NAN, 4.0));

        assert!(matches!(result, Err(SignatureError::InvalidPoint(_))));
        assert_eq!(log.borrow().len(), 1);
        assert!(pad.is_drawing());
    }
}
