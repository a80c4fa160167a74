//! Star rating widget implementation.
//!
//! This module provides [`RatingView`], a row of icons that displays a rating
//! and lets the user change it by touching or dragging across the row.
//!
//! Each icon position (a *slot*) is a pair of overlaid [`ImageView`]s: an
//! "empty" icon underneath and a "full" icon on top. Slot `i` stands for the
//! rating range `(i, i + 1]`; the full icon is shown whole, clipped to the
//! filled fraction, or hidden depending on where the rating falls.
//!
//! # Example
//!
//! ```
//! use horizon_rating::widget::Widget;
//! use horizon_rating::widget::widgets::{RatingMode, RatingView};
//! use horizon_rating_render::{Image, Rect};
//!
//! let mut view = RatingView::new()
//!     .with_max_rating(5)
//!     .with_mode(RatingMode::Half)
//!     .with_empty_image(Image::new(24, 24)?)
//!     .with_full_image(Image::new(24, 24)?);
//!
//! view.rating_updated.connect(|&rating| {
//!     println!("Rated {rating}");
//! });
//!
//! view.set_geometry(Rect::new(0.0, 0.0, 120.0, 24.0));
//! view.layout_if_needed();
//! view.set_rating(3.5);
//! assert_eq!(view.rating(), 3.5);
//! # Ok::<(), horizon_rating_render::RenderError>(())
//! ```

use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

use horizon_rating_core::Signal;
use horizon_rating_core::logging::{span_names, targets};
use horizon_rating_render::{Image, ImageScaleMode, Point, Rect, Size, aspect_fit};

use crate::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PaintContext, TouchEvent,
    TouchPhase, Widget, WidgetBase, WidgetEvent,
};

use super::ImageView;

/// How touch positions are turned into rating values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingMode {
    /// Only whole numbers.
    #[default]
    Whole,
    /// Whole numbers and halves.
    Half,
}

impl RatingMode {
    /// Whether a touch inside a slot may select part of it.
    #[inline]
    pub fn supports_fractions(self) -> bool {
        matches!(self, Self::Half)
    }

    /// Snap a within-slot fraction to the values this mode allows.
    fn quantize(self, fraction: f64) -> f64 {
        match self {
            Self::Whole => fraction,
            Self::Half => {
                if fraction > 0.75 {
                    1.0
                } else if fraction > 0.25 {
                    0.5
                } else {
                    0.0
                }
            }
        }
    }
}

/// Observer for user-driven rating changes.
///
/// Both methods have empty default implementations, so implementors only
/// override what they need. Explicit [`RatingView::set_rating`] calls never
/// reach the delegate.
pub trait RatingViewDelegate: Send + Sync {
    /// Called every time a touch or drag changes the rating.
    fn rating_is_updating(&self, view: &RatingView, rating: f64) {
        let _ = (view, rating);
    }

    /// Called once when the touch sequence ends or is cancelled.
    fn rating_did_update(&self, view: &RatingView, rating: f64) {
        let _ = (view, rating);
    }
}

/// A star rating display and input widget.
///
/// The rating is kept within `[min_rating, max_rating]`. In
/// [`RatingMode::Whole`] explicit assignments are rounded to whole numbers;
/// in [`RatingMode::Half`] they are stored as given and touches snap to halves.
///
/// Slots are laid out left to right across the widget's width during
/// [`Widget::layout_if_needed`]. Layout is skipped until an empty image is set,
/// since the icon size is derived from that image's aspect ratio.
///
/// # Signals
///
/// - `rating_updating(f64)`: Emitted for every touch-driven change
/// - `rating_updated(f64)`: Emitted when a touch sequence ends
pub struct RatingView {
    /// Widget base.
    base: WidgetBase,

    /// Current rating.
    rating: f64,

    /// Lowest rating a touch or assignment can produce.
    min_rating: u32,

    /// Number of slots and highest rating.
    max_rating: u32,

    /// Touch quantization and assignment rounding.
    mode: RatingMode,

    /// Image drawn in every empty slot.
    empty_image: Option<Image>,

    /// Image overlaid in every full slot.
    full_image: Option<Image>,

    /// Whether touches change the rating.
    editable: bool,

    /// Lower bound for the size offered to each slot during layout.
    min_slot_size: Size,

    /// Scale mode of every slot.
    content_mode: ImageScaleMode,

    /// Empty icons, one per slot.
    empty_slots: Vec<ImageView>,

    /// Full icons, index-aligned with `empty_slots`.
    full_slots: Vec<ImageView>,

    /// Non-owning observer.
    delegate: Option<Weak<dyn RatingViewDelegate>>,

    /// Whether a left-button mouse drag is in progress.
    tracking_mouse: bool,

    /// Signal emitted for every touch-driven rating change.
    pub rating_updating: Signal<f64>,

    /// Signal emitted when a touch sequence ends or is cancelled.
    pub rating_updated: Signal<f64>,
}

impl std::fmt::Debug for RatingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingView")
            .field("base", &self.base)
            .field("rating", &self.rating)
            .field("min_rating", &self.min_rating)
            .field("max_rating", &self.max_rating)
            .field("mode", &self.mode)
            .field("editable", &self.editable)
            .field("slots", &self.empty_slots.len())
            .finish_non_exhaustive()
    }
}

impl Default for RatingView {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingView {
    /// Default number of slots.
    pub const DEFAULT_MAX_RATING: u32 = 5;

    /// Default lower bound for slot size.
    pub const DEFAULT_MIN_SLOT_SIZE: Size = Size::new(5.0, 5.0);

    /// Create a new rating view with five slots and no images.
    pub fn new() -> Self {
        let mut view = Self {
            base: WidgetBase::new(),
            rating: 0.0,
            min_rating: 0,
            max_rating: Self::DEFAULT_MAX_RATING,
            mode: RatingMode::default(),
            empty_image: None,
            full_image: None,
            editable: true,
            min_slot_size: Self::DEFAULT_MIN_SLOT_SIZE,
            content_mode: ImageScaleMode::Fit,
            empty_slots: Vec::new(),
            full_slots: Vec::new(),
            delegate: None,
            tracking_mouse: false,
            rating_updating: Signal::new(),
            rating_updated: Signal::new(),
        };
        view.rebuild_slots();
        view
    }

    // =========================================================================
    // Rating
    // =========================================================================

    /// Get the current rating.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Assign the rating programmatically.
    ///
    /// In whole mode the value is rounded; in half mode it is stored as given.
    /// The result is clamped to `[min_rating, max_rating]`. Neither the
    /// delegate nor the signals are notified.
    pub fn set_rating(&mut self, rating: f64) {
        let rating = if self.mode.supports_fractions() {
            rating
        } else {
            rating.round()
        };
        self.store_rating(self.clamp_rating(rating));
    }

    /// Set the rating (builder pattern).
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.set_rating(rating);
        self
    }

    fn clamp_rating(&self, rating: f64) -> f64 {
        // max wins if the bounds cross
        rating
            .max(f64::from(self.min_rating))
            .min(f64::from(self.max_rating))
    }

    fn store_rating(&mut self, rating: f64) {
        if self.rating != rating {
            self.rating = rating;
            self.refresh();
        }
    }

    /// Get the minimum rating.
    pub fn min_rating(&self) -> u32 {
        self.min_rating
    }

    /// Set the minimum rating, moving the current rating back into range.
    pub fn set_min_rating(&mut self, min_rating: u32) {
        if self.min_rating != min_rating {
            self.min_rating = min_rating;
            self.store_rating(self.clamp_rating(self.rating));
        }
    }

    /// Set the minimum rating (builder pattern).
    pub fn with_min_rating(mut self, min_rating: u32) -> Self {
        self.set_min_rating(min_rating);
        self
    }

    /// Get the maximum rating, which is also the number of slots.
    pub fn max_rating(&self) -> u32 {
        self.max_rating
    }

    /// Set the maximum rating.
    ///
    /// Replaces every slot with a fresh set of `max_rating` slots and lowers
    /// the current rating if it is now out of range.
    pub fn set_max_rating(&mut self, max_rating: u32) {
        if self.max_rating == max_rating {
            return;
        }

        tracing::debug!(
            target: targets::RATING,
            from = self.max_rating,
            to = max_rating,
            "max rating changed, replacing slots"
        );
        self.max_rating = max_rating;
        self.remove_slots();
        self.base.set_needs_layout();
        self.rebuild_slots();
        self.rating = self.clamp_rating(self.rating);
        self.refresh();
    }

    /// Set the maximum rating (builder pattern).
    pub fn with_max_rating(mut self, max_rating: u32) -> Self {
        self.set_max_rating(max_rating);
        self
    }

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Get the rating mode.
    pub fn mode(&self) -> RatingMode {
        self.mode
    }

    /// Set the rating mode. The current rating is left as is.
    pub fn set_mode(&mut self, mode: RatingMode) {
        self.mode = mode;
    }

    /// Set the rating mode (builder pattern).
    pub fn with_mode(mut self, mode: RatingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether touches change the rating.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Enable or disable touch editing.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        if !editable {
            self.tracking_mouse = false;
        }
    }

    /// Set editability (builder pattern).
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.set_editable(editable);
        self
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Get the empty icon image.
    pub fn empty_image(&self) -> Option<&Image> {
        self.empty_image.as_ref()
    }

    /// Set the empty icon image on every empty slot.
    pub fn set_empty_image(&mut self, image: Option<Image>) {
        for slot in &mut self.empty_slots {
            slot.set_image(image.clone());
        }
        self.empty_image = image;
        self.base.set_needs_layout();
        self.refresh();
    }

    /// Set the empty icon image (builder pattern).
    pub fn with_empty_image(mut self, image: Image) -> Self {
        self.set_empty_image(Some(image));
        self
    }

    /// Get the full icon image.
    pub fn full_image(&self) -> Option<&Image> {
        self.full_image.as_ref()
    }

    /// Set the full icon image on every full slot.
    ///
    /// It should have the same size and shape as the empty image.
    pub fn set_full_image(&mut self, image: Option<Image>) {
        for slot in &mut self.full_slots {
            slot.set_image(image.clone());
        }
        self.full_image = image;
        self.refresh();
    }

    /// Set the full icon image (builder pattern).
    pub fn with_full_image(mut self, image: Image) -> Self {
        self.set_full_image(Some(image));
        self
    }

    /// Get the minimum slot size.
    pub fn min_slot_size(&self) -> Size {
        self.min_slot_size
    }

    /// Set the lower bound for the size offered to each slot.
    pub fn set_min_slot_size(&mut self, size: Size) {
        if self.min_slot_size != size {
            self.min_slot_size = size;
            self.base.set_needs_layout();
        }
    }

    /// Set the minimum slot size (builder pattern).
    pub fn with_min_slot_size(mut self, size: Size) -> Self {
        self.set_min_slot_size(size);
        self
    }

    /// Get the slot scale mode.
    pub fn content_mode(&self) -> ImageScaleMode {
        self.content_mode
    }

    /// Set the scale mode of every slot.
    pub fn set_content_mode(&mut self, mode: ImageScaleMode) {
        if self.content_mode != mode {
            self.content_mode = mode;
            for slot in self.empty_slots.iter_mut().chain(&mut self.full_slots) {
                slot.set_scale_mode(mode);
            }
        }
    }

    /// Set the slot scale mode (builder pattern).
    pub fn with_content_mode(mut self, mode: ImageScaleMode) -> Self {
        self.set_content_mode(mode);
        self
    }

    // =========================================================================
    // Delegate
    // =========================================================================

    /// Get the delegate, if it is still alive.
    pub fn delegate(&self) -> Option<Arc<dyn RatingViewDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Observe user-driven changes. Only a weak reference is kept.
    pub fn set_delegate<D: RatingViewDelegate + 'static>(&mut self, delegate: &Arc<D>) {
        let weak: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    /// Set the delegate (builder pattern).
    pub fn with_delegate<D: RatingViewDelegate + 'static>(mut self, delegate: &Arc<D>) -> Self {
        self.set_delegate(delegate);
        self
    }

    /// Remove the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    // =========================================================================
    // Slots
    // =========================================================================

    /// The empty icon views, in slot order.
    pub fn empty_slots(&self) -> &[ImageView] {
        &self.empty_slots
    }

    /// The full icon views, in slot order.
    pub fn full_slots(&self) -> &[ImageView] {
        &self.full_slots
    }

    fn rebuild_slots(&mut self) {
        if !self.empty_slots.is_empty() || !self.full_slots.is_empty() {
            return;
        }

        let count = self.max_rating as usize;
        self.empty_slots.reserve(count);
        self.full_slots.reserve(count);
        for _ in 0..count {
            let empty = self.make_slot(self.empty_image.clone());
            self.base.add_child(empty.widget_id());
            self.empty_slots.push(empty);

            let full = self.make_slot(self.full_image.clone());
            self.base.add_child(full.widget_id());
            self.full_slots.push(full);
        }

        tracing::debug!(target: targets::RATING, count, "slots created");
    }

    fn make_slot(&self, image: Option<Image>) -> ImageView {
        let mut slot = ImageView::new().with_scale_mode(self.content_mode);
        slot.set_image(image);
        slot
    }

    fn remove_slots(&mut self) {
        for slot in self.empty_slots.drain(..).chain(self.full_slots.drain(..)) {
            self.base.remove_child(slot.widget_id());
        }
    }

    /// Show, clip or hide each full icon according to the current rating.
    fn refresh(&mut self) {
        let rating = self.rating;
        for (i, slot) in self.full_slots.iter_mut().enumerate() {
            let start = i as f64;
            if rating >= start + 1.0 {
                slot.set_mask(None);
                slot.set_hidden(false);
            } else if rating > start {
                let size = slot.size();
                let width = ((rating - start) * f64::from(size.width)) as f32;
                slot.set_mask(Some(Rect::new(0.0, 0.0, width, size.height)));
                slot.set_hidden(false);
            } else {
                slot.set_mask(None);
                slot.set_hidden(true);
            }
        }
        self.base.update();
    }

    // =========================================================================
    // Touch handling
    // =========================================================================

    /// Map a position in widget coordinates to a rating and apply it.
    fn update_location(&mut self, pos: Point) {
        if !self.editable {
            return;
        }

        let _span = tracing::trace_span!(target: targets::TOUCH, span_names::TOUCH).entered();

        let mut candidate = 0.0;
        for (i, slot) in self.empty_slots.iter().enumerate().rev() {
            let frame = slot.geometry();
            if pos.x <= frame.left() {
                continue;
            }

            let local = slot.widget_base().map_from_parent(pos);
            let index = i as f64;
            candidate = if slot.widget_base().contains_point(local) && self.mode.supports_fractions()
            {
                let fraction = f64::from(local.x) / f64::from(frame.width());
                index + self.mode.quantize(fraction)
            } else {
                index + 1.0
            };
            break;
        }

        let rating = self.clamp_rating(candidate);
        if self.rating != rating {
            tracing::debug!(
                target: targets::TOUCH,
                from = self.rating,
                to = rating,
                x = pos.x,
                "rating changed by touch"
            );
        }
        self.store_rating(rating);

        if let Some(delegate) = self.delegate() {
            delegate.rating_is_updating(self, rating);
        }
        self.rating_updating.emit(rating);
    }

    /// Report the final rating of a touch sequence.
    fn finish_update(&mut self) {
        let rating = self.rating;
        tracing::debug!(target: targets::RATING, rating, "rating update finished");

        if let Some(delegate) = self.delegate() {
            delegate.rating_did_update(self, rating);
        }
        self.rating_updated.emit(rating);
    }

    fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let Some(point) = event.first_point() else {
            return false;
        };

        match event.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.update_location(point.local_pos);
                self.editable
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.finish_update();
                true
            }
        }
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        self.tracking_mouse = self.editable;
        self.update_location(event.local_pos);
        self.editable
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if !self.tracking_mouse || !event.is_pressed(MouseButton::Left) {
            return false;
        }
        self.update_location(event.local_pos);
        true
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || !self.tracking_mouse {
            return false;
        }
        self.tracking_mouse = false;
        self.finish_update();
        true
    }
}

impl Widget for RatingView {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn layout(&mut self) {
        let _span = tracing::trace_span!(target: targets::LAYOUT, span_names::LAYOUT).entered();

        let Some(image) = &self.empty_image else {
            tracing::trace!(target: targets::LAYOUT, "no empty image, layout skipped");
            return;
        };
        if self.empty_slots.is_empty() {
            return;
        }

        let bounds = self.base.size();
        let count = self.empty_slots.len() as f32;
        let offered = Size::new(bounds.width / count, bounds.height).max(self.min_slot_size);
        let icon = aspect_fit(image.size(), offered);
        let gap = if self.empty_slots.len() > 1 {
            (bounds.width - icon.width * count) / (count - 1.0)
        } else {
            0.0
        };

        tracing::trace!(
            target: targets::LAYOUT,
            width = icon.width,
            height = icon.height,
            gap,
            "slots laid out"
        );

        for (i, (empty, full)) in self
            .empty_slots
            .iter_mut()
            .zip(&mut self.full_slots)
            .enumerate()
        {
            let x = if i == 0 {
                0.0
            } else {
                i as f32 * (gap + icon.width)
            };
            let frame = Rect::new(x, 0.0, icon.width, icon.height);
            empty.set_geometry(frame);
            full.set_geometry(frame);
        }

        self.refresh();
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        for (empty, full) in self.empty_slots.iter().zip(&self.full_slots) {
            for slot in [empty, full] {
                let mut child = ctx.child(slot.geometry());
                slot.paint(&mut child);
            }
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if !self.base.is_enabled() && !matches!(event, WidgetEvent::Resize(_)) {
            return false;
        }

        let handled = match event {
            WidgetEvent::Touch(e) => self.handle_touch(e),
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::Resize(_) => {
                self.base.set_needs_layout();
                false
            }
        };
        if handled {
            event.accept();
        }
        handled
    }
}
