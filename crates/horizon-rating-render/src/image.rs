//! Image asset handles and scale-mode geometry.
//!
//! Decoding and GPU upload belong to the host renderer. Widgets only need to
//! know an image's identity and natural size to lay it out, so [`Image`] is a
//! cheap handle carrying exactly that.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{RenderError, RenderResult};
use crate::types::{Point, Rect, Size};

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies an image asset registered with the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        Self(NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A handle to a decoded image asset.
///
/// Cloning a handle yields the same asset; two separately created images are
/// never equal even if their dimensions match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    id: ImageId,
    width: u32,
    height: u32,
}

impl Image {
    /// Create a handle for an image with the given pixel dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            id: ImageId::next(),
            width,
            height,
        })
    }

    /// The asset identity.
    #[inline]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// How an image is scaled into its destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ImageScaleMode {
    /// Stretch the image to fill the destination rectangle.
    /// This may distort the image's aspect ratio.
    Stretch,

    /// Scale the image to fit within the destination rectangle while
    /// maintaining aspect ratio, centered.
    #[default]
    Fit,

    /// Scale the image to cover the destination rectangle while maintaining
    /// aspect ratio, centered. Parts of the image may fall outside.
    Fill,

    /// Draw the image at its natural size, centered.
    Center,
}

impl ImageScaleMode {
    /// Compute where an image of `image_size` lands inside `dest`.
    pub fn content_rect(self, image_size: Size, dest: Rect) -> Rect {
        let size = match self {
            Self::Stretch => return dest,
            Self::Fit => aspect_fit(image_size, dest.size),
            Self::Fill => aspect_fill(image_size, dest.size),
            Self::Center => image_size,
        };
        let origin = Point::new(
            dest.left() + (dest.width() - size.width) / 2.0,
            dest.top() + (dest.height() - size.height) / 2.0,
        );
        Rect { origin, size }
    }
}

/// Largest size with the aspect ratio of `image` that fits inside `bounds`.
///
/// If the image is relatively narrower than the bounds it is scaled to the
/// bounds' height, otherwise to their width.
pub fn aspect_fit(image: Size, bounds: Size) -> Size {
    let (Some(image_ratio), Some(bounds_ratio)) = (image.aspect_ratio(), bounds.aspect_ratio())
    else {
        return bounds;
    };

    if image_ratio < bounds_ratio {
        let scale = bounds.height / image.height;
        Size::new(scale * image.width, bounds.height)
    } else {
        let scale = bounds.width / image.width;
        Size::new(bounds.width, scale * image.height)
    }
}

/// Smallest size with the aspect ratio of `image` that covers `bounds`.
pub fn aspect_fill(image: Size, bounds: Size) -> Size {
    let (Some(image_ratio), Some(bounds_ratio)) = (image.aspect_ratio(), bounds.aspect_ratio())
    else {
        return bounds;
    };

    if image_ratio < bounds_ratio {
        let scale = bounds.width / image.width;
        Size::new(bounds.width, scale * image.height)
    } else {
        let scale = bounds.height / image.height;
        Size::new(scale * image.width, bounds.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_rejects_zero_dimensions() {
        assert_eq!(
            Image::new(0, 10),
            Err(RenderError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        let image = Image::new(24, 12).unwrap();
        assert_eq!(image.size(), Size::new(24.0, 12.0));
    }

    #[test]
    fn test_images_have_distinct_identity() {
        let a = Image::new(10, 10).unwrap();
        let b = Image::new(10, 10).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_aspect_fit_wide_bounds_scales_by_height() {
        // Square image into a 100x40 box: limited by height.
        let size = aspect_fit(Size::new(10.0, 10.0), Size::new(100.0, 40.0));
        assert_eq!(size, Size::new(40.0, 40.0));
    }

    #[test]
    fn test_aspect_fit_tall_bounds_scales_by_width() {
        // 2:1 image into a 20x50 box: limited by width.
        let size = aspect_fit(Size::new(20.0, 10.0), Size::new(20.0, 50.0));
        assert_eq!(size, Size::new(20.0, 10.0));
    }

    #[test]
    fn test_aspect_fill_covers_bounds() {
        let size = aspect_fill(Size::new(10.0, 10.0), Size::new(100.0, 40.0));
        assert_eq!(size, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_content_rect_centers_fitted_image() {
        let dest = Rect::new(10.0, 0.0, 40.0, 20.0);
        let rect = ImageScaleMode::Fit.content_rect(Size::new(10.0, 10.0), dest);
        assert_eq!(rect, Rect::new(20.0, 0.0, 20.0, 20.0));

        let stretched = ImageScaleMode::Stretch.content_rect(Size::new(10.0, 10.0), dest);
        assert_eq!(stretched, dest);

        let centered = ImageScaleMode::Center.content_rect(Size::new(10.0, 10.0), dest);
        assert_eq!(centered, Rect::new(25.0, 5.0, 10.0, 10.0));
    }
}
