//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for all
//! UI elements in Horizon Rating, and the [`PaintContext`] handed to
//! [`Widget::paint`].

use horizon_rating_render::{DisplayList, ImageId, Point, Rect, Size};

use super::base::{WidgetBase, WidgetId};
use super::events::WidgetEvent;

/// Context provided during widget painting.
///
/// Wraps the display list being recorded and the painting widget's placement.
/// Coordinates passed to the drawing methods are widget-local; the context
/// translates them into the coordinate space of the root of the paint pass.
pub struct PaintContext<'a> {
    /// The list being recorded.
    list: &'a mut DisplayList,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
    /// Offset of the widget's origin from the root of the paint pass.
    offset: Point,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context for a root widget of the given size.
    pub fn new(list: &'a mut DisplayList, size: Size) -> Self {
        Self {
            list,
            widget_rect: Rect::from_size(size),
            offset: Point::ZERO,
        }
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Create a context for painting a child placed at `child_geometry`
    /// (in this widget's coordinates).
    pub fn child(&mut self, child_geometry: Rect) -> PaintContext<'_> {
        PaintContext {
            list: self.list,
            widget_rect: Rect::from_size(child_geometry.size),
            offset: self.offset + child_geometry.origin,
        }
    }

    /// Draw an image into `dest`, optionally clipped, both in local coordinates.
    pub fn draw_image(&mut self, image: ImageId, dest: Rect, clip: Option<Rect>) {
        let dest = dest.offset(self.offset.x, self.offset.y);
        let clip = clip.map(|clip| clip.offset(self.offset.x, self.offset.y));
        self.list.draw_image(image, dest, clip);
    }
}

/// The base trait for all widgets.
///
/// Implementors hold a [`WidgetBase`] and expose it through
/// [`widget_base`](Self::widget_base) / [`widget_base_mut`](Self::widget_base_mut);
/// the provided methods delegate to it.
pub trait Widget {
    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's unique ID.
    fn widget_id(&self) -> WidgetId {
        self.widget_base().widget_id()
    }

    /// Get the widget's geometry in parent coordinates.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry in parent coordinates.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Show or hide the widget.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Request a layout pass.
    fn set_needs_layout(&mut self) {
        self.widget_base_mut().set_needs_layout();
    }

    /// Position child widgets. Called by [`layout_if_needed`](Self::layout_if_needed).
    fn layout(&mut self) {}

    /// Run [`layout`](Self::layout) if a layout pass is pending.
    fn layout_if_needed(&mut self) {
        if self.widget_base_mut().take_needs_layout() {
            self.layout();
        }
    }

    /// Paint the widget.
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let _ = ctx;
    }

    /// Handle an event. Returns `true` if the event was handled.
    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let _ = event;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_rating_render::{DrawCommand, Image};

    #[test]
    fn test_child_context_translates_draws() {
        let image = Image::new(4, 4).unwrap();
        let mut list = DisplayList::new();
        let mut ctx = PaintContext::new(&mut list, Size::new(100.0, 20.0));

        {
            let mut child = ctx.child(Rect::new(40.0, 0.0, 20.0, 20.0));
            assert_eq!(child.rect(), Rect::new(0.0, 0.0, 20.0, 20.0));
            child.draw_image(
                image.id(),
                Rect::new(0.0, 0.0, 20.0, 20.0),
                Some(Rect::new(0.0, 0.0, 10.0, 20.0)),
            );
        }

        assert_eq!(
            list.commands(),
            &[DrawCommand::Image {
                image: image.id(),
                dest: Rect::new(40.0, 0.0, 20.0, 20.0),
                clip: Some(Rect::new(40.0, 0.0, 10.0, 20.0)),
            }]
        );
    }
}
