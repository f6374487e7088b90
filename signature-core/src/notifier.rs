//! Synchronous change notification to the host.

use std::fmt;

use crate::Drawing;

/// Receives the current drawing after every change.
pub trait DrawingListener {
    /// Called synchronously with the latest snapshot.
    fn on_drawing_changed(&mut self, drawing: &Drawing);
}

impl<F> DrawingListener for F
where
    F: FnMut(&Drawing),
{
    fn on_drawing_changed(&mut self, drawing: &Drawing) {
        self(drawing);
    }
}

/// Fans a drawing snapshot out to every subscribed listener.
///
/// Listeners run in subscription order on the caller's thread. There is no
/// batching: one call to [`ChangeNotifier::notify`] is one callback each.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Box<dyn DrawingListener>>,
}

impl ChangeNotifier {
    /// Create a notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl DrawingListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove all listeners.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Hand `drawing` to every listener.
    pub fn notify(&mut self, drawing: &Drawing) {
        for listener in &mut self.listeners {
            listener.on_drawing_changed(drawing);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::{CurvePath, Point};

    #[test]
    fn test_notify_reaches_listeners_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = Rc::clone(&log);
        notifier.subscribe(move |d: &Drawing| first.borrow_mut().push(("first", d.stroke_count())));
        let second = Rc::clone(&log);
        notifier.subscribe(move |d: &Drawing| second.borrow_mut().push(("second", d.stroke_count())));

        let drawing = Drawing::new(vec![CurvePath::from_points(&[Point::new(1.0, 1.0)])]);
        notifier.notify(&drawing);

        assert_eq!(*log.borrow(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn test_struct_listener_is_supported() {
        struct Recorder(Rc<RefCell<Vec<String>>>);

        impl DrawingListener for Recorder {
            fn on_drawing_changed(&mut self, drawing: &Drawing) {
                self.0.borrow_mut().push(drawing.to_path_data());
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(Recorder(Rc::clone(&seen)));

        notifier.notify(&Drawing::default());
        notifier.notify(&Drawing::new(vec![CurvePath::from_points(&[Point::new(2.0, 3.0)])]));

        assert_eq!(*seen.borrow(), vec![String::new(), "M2,3".to_string()]);
    }

    #[test]
    fn test_clear_removes_listeners() {
        let calls = Rc::new(RefCell::new(0));
        let mut notifier = ChangeNotifier::new();
        let counter = Rc::clone(&calls);
        notifier.subscribe(move |_: &Drawing| *counter.borrow_mut() += 1);
        assert_eq!(notifier.listener_count(), 1);

        notifier.clear();
        notifier.notify(&Drawing::default());
        assert_eq!(notifier.listener_count(), 0);
        assert_eq!(*calls.borrow(), 0);
    }
}
