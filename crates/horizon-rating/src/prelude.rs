//! Prelude module for Horizon Rating.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_rating::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ConnectionId`)
//! - Widget foundation (`Widget`, `WidgetBase`, `PaintContext`, events)
//! - The rating widget and its delegate
//! - Geometry and image types (`Point`, `Size`, `Rect`, `Image`)

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::touch::TouchInputHandler;
pub use crate::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PaintContext, TouchEvent,
    TouchPhase, TouchPoint, Widget, WidgetBase, WidgetEvent, WidgetId,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{ImageView, RatingMode, RatingView, RatingViewDelegate};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{ConfigError, RatingViewConfig};

// ============================================================================
// Geometry and Rendering
// ============================================================================

pub use crate::render::{DisplayList, DrawCommand, Image, ImageScaleMode, Point, Rect, Size};
