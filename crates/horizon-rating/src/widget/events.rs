//! Widget-specific event types.
//!
//! This module defines the input and lifecycle events a rating widget
//! receives from its host: touches, the mouse events that desktop hosts
//! deliver in their place, and resizes.

use horizon_rating_render::{Point, Size};

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

impl MouseButton {
    /// Bit for this button in a [`MouseMoveEvent::buttons`] mask.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Resize event, sent when a widget's size changes.
#[derive(Debug, Clone)]
pub struct ResizeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The old size of the widget.
    pub old_size: Size,
    /// The new size of the widget.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point, window_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point, window_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Mouse buttons currently held, as a mask of [`MouseButton::mask`] bits.
    pub buttons: u8,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, window_pos: Point, buttons: u8) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            window_pos,
            buttons,
        }
    }

    /// Whether `button` is held during this move.
    #[inline]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }
}

/// Phase of a touch point's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The finger touched the screen.
    Started,
    /// The finger moved.
    Moved,
    /// The finger was lifted.
    Ended,
    /// The system cancelled the touch (e.g. a gesture took over).
    Cancelled,
}

impl TouchPhase {
    /// Whether this phase ends the touch sequence.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// A single touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Identifier stable for the lifetime of the contact.
    pub id: u64,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Phase of this contact.
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Create a new touch point.
    pub fn new(id: u64, local_pos: Point, window_pos: Point, phase: TouchPhase) -> Self {
        Self {
            id,
            local_pos,
            window_pos,
            phase,
        }
    }
}

/// Touch event carrying the contacts that changed.
#[derive(Debug, Clone)]
pub struct TouchEvent {
    /// Base event data.
    pub base: EventBase,
    /// The phase shared by the changed contacts.
    pub phase: TouchPhase,
    /// The changed contacts. May be empty.
    pub points: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create a touch event for a single contact.
    pub fn new(point: TouchPoint) -> Self {
        Self {
            base: EventBase::new(),
            phase: point.phase,
            points: vec![point],
        }
    }

    /// Create a touch event with an explicit set of contacts.
    pub fn with_points(phase: TouchPhase, points: Vec<TouchPoint>) -> Self {
        Self {
            base: EventBase::new(),
            phase,
            points,
        }
    }

    /// The first contact, if any.
    pub fn first_point(&self) -> Option<&TouchPoint> {
        self.points.first()
    }

    /// Recompute every contact's local position for a widget whose top-left
    /// corner sits at `widget_origin` in window coordinates.
    pub fn map_to_local(&mut self, widget_origin: Point) {
        for point in &mut self.points {
            point.local_pos = point.window_pos - widget_origin;
        }
    }
}

/// Events delivered to widgets through [`Widget::event`](super::Widget::event).
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Resize event.
    Resize(ResizeEvent),
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Mouse move event.
    MouseMove(MouseMoveEvent),
    /// Touch event.
    Touch(TouchEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::Resize(e) => &e.base,
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Touch(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Resize(e) => &mut e.base,
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Touch(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_move_button_mask() {
        let event = MouseMoveEvent::new(Point::ZERO, Point::ZERO, MouseButton::Left.mask());
        assert!(event.is_pressed(MouseButton::Left));
        assert!(!event.is_pressed(MouseButton::Right));
    }

    #[test]
    fn test_widget_event_accept() {
        let point = TouchPoint::new(1, Point::ZERO, Point::ZERO, TouchPhase::Started);
        let mut event = WidgetEvent::Touch(TouchEvent::new(point));
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_touch_phase_terminal() {
        assert!(!TouchPhase::Started.is_terminal());
        assert!(!TouchPhase::Moved.is_terminal());
        assert!(TouchPhase::Ended.is_terminal());
        assert!(TouchPhase::Cancelled.is_terminal());
    }
}
