//! Horizon Rating - a star rating widget for Horizon GUI applications.
//!
//! This is the main crate: it provides the widget system the rating view is
//! built on, the [`RatingView`](widget::widgets::RatingView) itself, and TOML
//! configuration. Geometry and image handles come from
//! `horizon-rating-render`; signals and logging targets from
//! `horizon-rating-core`.
//!
//! # Example
//!
//! ```
//! use horizon_rating::prelude::*;
//!
//! let mut stars = RatingView::new()
//!     .with_mode(RatingMode::Half)
//!     .with_empty_image(Image::new(32, 32)?)
//!     .with_full_image(Image::new(32, 32)?);
//!
//! stars.set_geometry(Rect::new(0.0, 0.0, 200.0, 32.0));
//! stars.layout_if_needed();
//!
//! // Record the frame for the host renderer.
//! let mut list = DisplayList::new();
//! stars.paint(&mut PaintContext::new(&mut list, stars.size()));
//! # Ok::<(), horizon_rating::render::RenderError>(())
//! ```

pub use horizon_rating_core::*;

/// Geometry, image handles and draw recording.
pub mod render {
    pub use horizon_rating_render::*;
}

pub mod config;
pub mod prelude;
pub mod widget;
