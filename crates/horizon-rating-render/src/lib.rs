//! Geometry, image handles and draw recording for Horizon Rating.
//!
//! This crate is the rendering-facing layer of the rating widget. It does not
//! rasterize anything itself; the host renderer owns decoding and the GPU.
//!
//! - [`Point`], [`Size`], [`Rect`]: layout geometry
//! - [`Image`], [`ImageScaleMode`]: asset handles and how they fit a frame
//! - [`DisplayList`]: the recorded output of a widget paint pass
//!
//! # Example
//!
//! ```
//! use horizon_rating_render::{DisplayList, Image, ImageScaleMode, Rect, Size};
//!
//! let star = Image::new(24, 24)?;
//! let dest = ImageScaleMode::Fit.content_rect(star.size(), Rect::new(0.0, 0.0, 48.0, 24.0));
//!
//! let mut list = DisplayList::new();
//! list.draw_image(star.id(), dest, None);
//! assert_eq!(list.len(), 1);
//! # Ok::<(), horizon_rating_render::RenderError>(())
//! ```

mod error;
mod image;
mod paint;
mod types;

pub use error::{RenderError, RenderResult};
pub use image::{Image, ImageId, ImageScaleMode, aspect_fill, aspect_fit};
pub use paint::{DisplayList, DrawCommand};
pub use types::{Point, Rect, Size};
