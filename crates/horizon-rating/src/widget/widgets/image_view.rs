//! Image view widget.
//!
//! `ImageView` shows a single [`Image`] scaled into its bounds. It can be
//! hidden without being detached, and can carry a mask that clips drawing to
//! a rectangle in its own coordinates. The rating widget builds its icon
//! slots out of these.
//!
//! # Example
//!
//! ```
//! use horizon_rating::widget::widgets::ImageView;
//! use horizon_rating_render::{Image, ImageScaleMode, Rect};
//!
//! let star = Image::new(24, 24)?;
//! let mut view = ImageView::new()
//!     .with_image(star)
//!     .with_scale_mode(ImageScaleMode::Fit);
//!
//! // Only the left half is drawn.
//! view.set_mask(Some(Rect::new(0.0, 0.0, 12.0, 24.0)));
//! # Ok::<(), horizon_rating_render::RenderError>(())
//! ```

use horizon_rating_render::{Image, ImageScaleMode, Rect};

use crate::widget::{PaintContext, Widget, WidgetBase};

/// A widget that displays one image.
#[derive(Debug)]
pub struct ImageView {
    /// Widget base.
    base: WidgetBase,

    /// The displayed image.
    image: Option<Image>,

    /// How the image is scaled into the view's bounds.
    scale_mode: ImageScaleMode,

    /// Clip rectangle in local coordinates.
    mask: Option<Rect>,
}

impl Default for ImageView {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageView {
    /// Create a new empty image view.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            image: None,
            scale_mode: ImageScaleMode::default(),
            mask: None,
        }
    }

    // =========================================================================
    // Image
    // =========================================================================

    /// Get the displayed image.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Set the displayed image.
    pub fn set_image(&mut self, image: Option<Image>) {
        if self.image != image {
            self.image = image;
            self.base.update();
        }
    }

    /// Set the displayed image (builder pattern).
    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Get the scale mode.
    pub fn scale_mode(&self) -> ImageScaleMode {
        self.scale_mode
    }

    /// Set the scale mode.
    pub fn set_scale_mode(&mut self, mode: ImageScaleMode) {
        if self.scale_mode != mode {
            self.scale_mode = mode;
            self.base.update();
        }
    }

    /// Set the scale mode (builder pattern).
    pub fn with_scale_mode(mut self, mode: ImageScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    /// Whether the view is hidden.
    pub fn is_hidden(&self) -> bool {
        !self.base.is_visible()
    }

    /// Hide or show the view.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.base.set_visible(!hidden);
    }

    // =========================================================================
    // Mask
    // =========================================================================

    /// Get the clip mask, in local coordinates.
    pub fn mask(&self) -> Option<Rect> {
        self.mask
    }

    /// Set or clear the clip mask.
    pub fn set_mask(&mut self, mask: Option<Rect>) {
        if self.mask != mask {
            self.mask = mask;
            self.base.update();
        }
    }
}

impl Widget for ImageView {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() {
            return;
        }
        let Some(image) = &self.image else {
            return;
        };

        let dest = self.scale_mode.content_rect(image.size(), ctx.rect());
        ctx.draw_image(image.id(), dest, self.mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_rating_render::{DisplayList, DrawCommand};

    fn paint(view: &ImageView) -> DisplayList {
        let mut list = DisplayList::new();
        let mut ctx = PaintContext::new(&mut list, view.size());
        view.paint(&mut ctx);
        list
    }

    #[test]
    fn test_paints_fitted_image() {
        let image = Image::new(10, 20).unwrap();
        let mut view = ImageView::new().with_image(image.clone());
        view.set_geometry(Rect::new(0.0, 0.0, 20.0, 20.0));

        let list = paint(&view);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Image {
                image: image.id(),
                dest: Rect::new(5.0, 0.0, 10.0, 20.0),
                clip: None,
            }]
        );
    }

    #[test]
    fn test_hidden_view_draws_nothing() {
        let mut view = ImageView::new().with_image(Image::new(8, 8).unwrap());
        view.set_geometry(Rect::new(0.0, 0.0, 8.0, 8.0));
        view.set_hidden(true);

        assert!(view.is_hidden());
        assert!(paint(&view).is_empty());
    }

    #[test]
    fn test_view_without_image_draws_nothing() {
        let mut view = ImageView::new();
        view.set_geometry(Rect::new(0.0, 0.0, 8.0, 8.0));
        assert!(paint(&view).is_empty());
    }

    #[test]
    fn test_mask_clips_draw() {
        let image = Image::new(8, 8).unwrap();
        let mut view = ImageView::new()
            .with_image(image.clone())
            .with_scale_mode(ImageScaleMode::Stretch);
        view.set_geometry(Rect::new(0.0, 0.0, 8.0, 8.0));
        view.set_mask(Some(Rect::new(0.0, 0.0, 2.0, 8.0)));

        let list = paint(&view);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Image {
                image: image.id(),
                dest: Rect::new(0.0, 0.0, 8.0, 8.0),
                clip: Some(Rect::new(0.0, 0.0, 2.0, 8.0)),
            }]
        );
    }
}
