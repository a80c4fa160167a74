//! Recorded drawing.
//!
//! Widgets paint into a [`DisplayList`] instead of talking to a GPU device.
//! The host renderer replays the list each frame.

use crate::image::ImageId;
use crate::types::Rect;

/// A single recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Draw an image into `dest`, optionally clipped to `clip`.
    ///
    /// Both rectangles are in the coordinate space of the painting widget.
    Image {
        image: ImageId,
        dest: Rect,
        clip: Option<Rect>,
    },
}

/// An ordered list of draw commands, painted back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an image draw.
    ///
    /// A clip that does not intersect `dest` makes the draw invisible, so it
    /// is dropped.
    pub fn draw_image(&mut self, image: ImageId, dest: Rect, clip: Option<Rect>) {
        if let Some(clip) = clip
            && dest.intersect(&clip).is_none()
        {
            tracing::trace!(target: "horizon_rating_render::paint", ?dest, ?clip, "clipped out image draw");
            return;
        }
        self.commands.push(DrawCommand::Image { image, dest, clip });
    }

    /// The recorded commands, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Remove all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    #[test]
    fn test_draw_image_records_in_order() {
        let a = Image::new(8, 8).unwrap();
        let b = Image::new(8, 8).unwrap();
        let mut list = DisplayList::new();

        list.draw_image(a.id(), Rect::new(0.0, 0.0, 8.0, 8.0), None);
        list.draw_image(b.id(), Rect::new(8.0, 0.0, 8.0, 8.0), None);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Image { image, .. } if image == a.id()));
        assert!(matches!(list.commands()[1], DrawCommand::Image { image, .. } if image == b.id()));
    }

    #[test]
    fn test_fully_clipped_draw_is_dropped() {
        let image = Image::new(8, 8).unwrap();
        let mut list = DisplayList::new();

        list.draw_image(
            image.id(),
            Rect::new(0.0, 0.0, 8.0, 8.0),
            Some(Rect::new(0.0, 0.0, 0.0, 8.0)),
        );

        assert!(list.is_empty(), "zero-width clip should hide the draw");
    }
}
