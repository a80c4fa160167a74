//! Widget system for Horizon Rating.
//!
//! This module provides the widget architecture the rating view is built on:
//!
//! - [`Widget`] trait: The base trait for all UI elements
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - [`PaintContext`]: Records a widget's drawing into a display list
//! - Widget events for touch, mouse and resize input
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Implement `layout()` if the widget positions children
//! 4. Implement `paint()` for rendering
//!
//! ```
//! use horizon_rating::widget::*;
//! use horizon_rating_render::Image;
//!
//! struct Badge {
//!     base: WidgetBase,
//!     icon: Image,
//! }
//!
//! impl Widget for Badge {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn paint(&self, ctx: &mut PaintContext<'_>) {
//!         ctx.draw_image(self.icon.id(), ctx.rect(), None);
//!     }
//!
//!     fn event(&mut self, event: &mut WidgetEvent) -> bool {
//!         match event {
//!             WidgetEvent::MousePress(_) => {
//!                 event.accept();
//!                 true
//!             }
//!             _ => false,
//!         }
//!     }
//! }
//! ```
//!
//! # Coordinate Systems
//!
//! - **Local coordinates**: Origin at widget's top-left corner
//! - **Parent coordinates**: Relative to parent widget's top-left
//! - **Window coordinates**: Relative to window's top-left
//!
//! Events arrive in local coordinates. Host touches are converted by
//! [`touch::TouchInputHandler`] and mapped with [`TouchEvent::map_to_local`].

mod base;
mod events;
pub mod touch;
mod traits;
pub mod widgets;


pub use base::{WidgetBase, WidgetId};
pub use events::{
    EventBase, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, ResizeEvent,
    TouchEvent, TouchPhase, TouchPoint, WidgetEvent,
};
pub use traits::{PaintContext, Widget};
