//! Standard widgets for Horizon Rating.
//!
//! - [`ImageView`]: Single image display, used for rating slots
//! - [`RatingView`]: Star rating display and input

mod image_view;
mod rating_view;

pub use image_view::ImageView;
pub use rating_view::{RatingMode, RatingView, RatingViewDelegate};
