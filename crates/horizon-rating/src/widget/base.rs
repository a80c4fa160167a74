//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets. It handles identity, geometry, visibility, enabled state,
//! the attached-children list, and layout/repaint invalidation.

use std::sync::atomic::{AtomicU64, Ordering};

use horizon_rating_core::Signal;
use horizon_rating_core::logging::targets;
use horizon_rating_render::{Point, Rect, Size};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// The base implementation for all widgets.
///
/// This struct provides common functionality that all widgets need:
/// - A unique [`WidgetId`]
/// - Geometry management (position relative to the parent, and size)
/// - Visibility and enabled state
/// - The ordered list of attached child widgets
/// - Layout and repaint invalidation flags
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
pub struct WidgetBase {
    /// The widget's identity.
    id: WidgetId,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget's children need to be laid out again.
    needs_layout: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Attached children, in paint order.
    children: Vec<WidgetId>,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.id)
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("needs_layout", &self.needs_layout)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base with zero geometry.
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            needs_layout: true,
            needs_repaint: true,
            children: Vec::new(),
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
        }
    }

    /// Get the widget's unique ID.
    #[inline]
    pub fn widget_id(&self) -> WidgetId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// A size change invalidates layout. Emits `geometry_changed` if the
    /// geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            if self.geometry.size != rect.size {
                self.needs_layout = true;
            }
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Get the widget's local rectangle (origin at 0,0).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.geometry.size)
    }

    /// Map a point from the parent's coordinate system into this widget's.
    #[inline]
    pub fn map_from_parent(&self, point: Point) -> Point {
        point - self.geometry.origin
    }

    /// Check whether a point in local coordinates lies inside the widget.
    #[inline]
    pub fn contains_point(&self, local: Point) -> bool {
        self.rect().contains(local)
    }

    // =========================================================================
    // Visibility and enabled state
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input handling. Disabled widgets ignore pointer
    /// and touch events.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Attached children, in attachment (paint) order.
    #[inline]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Attach a child at the end of the child list.
    ///
    /// Attaching a child that is already attached does nothing.
    pub fn add_child(&mut self, child: WidgetId) {
        if !self.children.contains(&child) {
            self.children.push(child);
            self.needs_repaint = true;
        }
    }

    /// Detach a child. Returns `false` if it was not attached.
    pub fn remove_child(&mut self, child: WidgetId) -> bool {
        match self.children.iter().position(|&id| id == child) {
            Some(index) => {
                self.children.remove(index);
                self.needs_repaint = true;
                true
            }
            None => {
                tracing::trace!(target: targets::WIDGET, ?child, "remove of unattached child");
                false
            }
        }
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Check whether a layout pass is pending.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Request a layout pass before the next paint.
    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Clear the pending layout flag, returning whether it was set.
    pub fn take_needs_layout(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }

    /// Schedule a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Check whether a repaint is pending.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }
}
