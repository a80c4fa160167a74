//! Touch input handling and conversion from platform events.
//!
//! This module translates platform-level touch events (from winit) into
//! widget touch events and tracks which contacts are currently down.
//!
//! ```ignore
//! use horizon_rating::widget::touch::TouchInputHandler;
//!
//! let mut handler = TouchInputHandler::new();
//!
//! // When receiving a winit touch event:
//! let mut event = handler.handle_touch(&touch);
//! event.map_to_local(rating_view_window_origin);
//! rating_view.event(&mut WidgetEvent::Touch(event));
//! ```

use std::collections::HashMap;

use winit::event::{Touch, TouchPhase as WinitTouchPhase};

use horizon_rating_core::logging::targets;
use horizon_rating_render::Point;

use super::events::{TouchEvent, TouchPhase, TouchPoint};

impl From<WinitTouchPhase> for TouchPhase {
    fn from(phase: WinitTouchPhase) -> Self {
        match phase {
            WinitTouchPhase::Started => TouchPhase::Started,
            WinitTouchPhase::Moved => TouchPhase::Moved,
            WinitTouchPhase::Ended => TouchPhase::Ended,
            WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
        }
    }
}

/// Information about an active touch.
#[derive(Debug, Clone, Copy)]
struct ActiveTouch {
    /// Current position in window coordinates.
    position: Point,
    /// Start position in window coordinates.
    start_position: Point,
}

/// Handler for touch input that maintains touch state.
///
/// Produced events carry window coordinates in both `window_pos` and
/// `local_pos`; the dispatcher maps them into the target widget with
/// [`TouchEvent::map_to_local`].
#[derive(Debug, Default)]
pub struct TouchInputHandler {
    /// Currently active touches, keyed by touch ID.
    active_touches: HashMap<u64, ActiveTouch>,
}

impl TouchInputHandler {
    /// Creates a new touch input handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the number of active touches.
    pub fn active_touch_count(&self) -> usize {
        self.active_touches.len()
    }

    /// Gets the position of an active touch by ID.
    pub fn touch_position(&self, id: u64) -> Option<Point> {
        self.active_touches.get(&id).map(|t| t.position)
    }

    /// Gets where an active touch first went down.
    pub fn touch_start_position(&self, id: u64) -> Option<Point> {
        self.active_touches.get(&id).map(|t| t.start_position)
    }

    /// Handles a touch event from winit.
    pub fn handle_touch(&mut self, touch: &Touch) -> TouchEvent {
        let position = Point::new(touch.location.x as f32, touch.location.y as f32);
        self.handle_contact(touch.id, touch.phase.into(), position)
    }

    /// Handles a single contact update in window coordinates.
    pub fn handle_contact(&mut self, id: u64, phase: TouchPhase, window_pos: Point) -> TouchEvent {
        match phase {
            TouchPhase::Started => {
                self.active_touches.insert(
                    id,
                    ActiveTouch {
                        position: window_pos,
                        start_position: window_pos,
                    },
                );
            }
            TouchPhase::Moved => {
                if let Some(active) = self.active_touches.get_mut(&id) {
                    active.position = window_pos;
                } else {
                    tracing::trace!(target: targets::TOUCH, id, "move for untracked touch");
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touches.remove(&id);
            }
        }

        // local_pos is fixed up during dispatch
        TouchEvent::new(TouchPoint::new(id, window_pos, window_pos, phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winit_phase_conversion() {
        assert_eq!(TouchPhase::from(WinitTouchPhase::Started), TouchPhase::Started);
        assert_eq!(TouchPhase::from(WinitTouchPhase::Moved), TouchPhase::Moved);
        assert_eq!(TouchPhase::from(WinitTouchPhase::Ended), TouchPhase::Ended);
        assert_eq!(
            TouchPhase::from(WinitTouchPhase::Cancelled),
            TouchPhase::Cancelled
        );
    }

    #[test]
    fn test_tracks_touch_lifecycle() {
        let mut handler = TouchInputHandler::new();

        handler.handle_contact(7, TouchPhase::Started, Point::new(10.0, 5.0));
        assert_eq!(handler.active_touch_count(), 1);

        let event = handler.handle_contact(7, TouchPhase::Moved, Point::new(30.0, 5.0));
        assert_eq!(event.phase, TouchPhase::Moved);
        assert_eq!(handler.touch_position(7), Some(Point::new(30.0, 5.0)));
        assert_eq!(handler.touch_start_position(7), Some(Point::new(10.0, 5.0)));

        handler.handle_contact(7, TouchPhase::Ended, Point::new(30.0, 5.0));
        assert_eq!(handler.active_touch_count(), 0);
        assert_eq!(handler.touch_position(7), None);
    }

    #[test]
    fn test_event_maps_to_widget_local() {
        let mut handler = TouchInputHandler::new();
        let mut event = handler.handle_contact(1, TouchPhase::Started, Point::new(120.0, 45.0));

        event.map_to_local(Point::new(100.0, 40.0));

        let point = event.first_point().expect("event should carry the contact");
        assert_eq!(point.local_pos, Point::new(20.0, 5.0));
        assert_eq!(point.window_pos, Point::new(120.0, 45.0));
    }
}
