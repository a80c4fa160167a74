//! TOML configuration for rating views.
//!
//! A [`RatingViewConfig`] captures every plain property of a
//! [`RatingView`](crate::widget::widgets::RatingView). Images are not part of
//! the configuration; assign them after construction.
//!
//! ```
//! use horizon_rating::config::RatingViewConfig;
//! use horizon_rating::widget::widgets::{RatingMode, RatingView};
//!
//! let config = RatingViewConfig::from_toml_str(
//!     r#"
//!     max_rating = 10
//!     mode = "half"
//!     rating = 6.5
//!     "#,
//! )?;
//!
//! let view = RatingView::from_config(&config);
//! assert_eq!(view.max_rating(), 10);
//! assert_eq!(view.mode(), RatingMode::Half);
//! assert_eq!(view.rating(), 6.5);
//! # Ok::<(), horizon_rating::config::ConfigError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use horizon_rating_core::logging::targets;
use horizon_rating_render::{ImageScaleMode, Size};

use crate::widget::widgets::{RatingMode, RatingView};

/// Errors produced while loading a rating view configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid TOML or does not match the schema.
    #[error("invalid rating view configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize rating view configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `min_rating` exceeds `max_rating`.
    #[error("min_rating {min} exceeds max_rating {max}")]
    InvalidRange { min: u32, max: u32 },

    /// `max_rating` exceeds [`RatingViewConfig::MAX_SLOTS`].
    #[error("max_rating {max} exceeds the limit of {limit} slots")]
    TooManySlots { max: u32, limit: u32 },

    /// `min_slot_size` has a negative or non-finite component.
    #[error("invalid min_slot_size {width}x{height}")]
    InvalidSlotSize { width: f32, height: f32 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// How slot images are scaled, as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Fill the slot, ignoring aspect ratio.
    Stretch,
    /// Fit inside the slot, keeping aspect ratio.
    #[default]
    Fit,
    /// Cover the slot, keeping aspect ratio.
    Fill,
    /// Natural size, centered.
    Center,
}

impl From<ContentMode> for ImageScaleMode {
    fn from(mode: ContentMode) -> Self {
        match mode {
            ContentMode::Stretch => ImageScaleMode::Stretch,
            ContentMode::Fit => ImageScaleMode::Fit,
            ContentMode::Fill => ImageScaleMode::Fill,
            ContentMode::Center => ImageScaleMode::Center,
        }
    }
}

impl From<ImageScaleMode> for ContentMode {
    fn from(mode: ImageScaleMode) -> Self {
        match mode {
            ImageScaleMode::Stretch => ContentMode::Stretch,
            ImageScaleMode::Fit => ContentMode::Fit,
            ImageScaleMode::Fill => ContentMode::Fill,
            ImageScaleMode::Center => ContentMode::Center,
        }
    }
}

/// Plain properties of a rating view. Missing keys take the widget defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingViewConfig {
    pub rating: f64,
    pub min_rating: u32,
    pub max_rating: u32,
    pub mode: RatingMode,
    pub editable: bool,
    /// `[width, height]`.
    pub min_slot_size: [f32; 2],
    pub content_mode: ContentMode,
}

impl Default for RatingViewConfig {
    fn default() -> Self {
        let min_slot_size = RatingView::DEFAULT_MIN_SLOT_SIZE;
        Self {
            rating: 0.0,
            min_rating: 0,
            max_rating: RatingView::DEFAULT_MAX_RATING,
            mode: RatingMode::Whole,
            editable: true,
            min_slot_size: [min_slot_size.width, min_slot_size.height],
            content_mode: ContentMode::Fit,
        }
    }
}

impl RatingViewConfig {
    /// Largest `max_rating` a configuration may request.
    pub const MAX_SLOTS: u32 = 100;

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading rating view config");
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_rating > self.max_rating {
            tracing::warn!(
                target: targets::CONFIG,
                min = self.min_rating,
                max = self.max_rating,
                "rejected rating range"
            );
            return Err(ConfigError::InvalidRange {
                min: self.min_rating,
                max: self.max_rating,
            });
        }

        if self.max_rating > Self::MAX_SLOTS {
            tracing::warn!(target: targets::CONFIG, max = self.max_rating, "rejected slot count");
            return Err(ConfigError::TooManySlots {
                max: self.max_rating,
                limit: Self::MAX_SLOTS,
            });
        }

        let [width, height] = self.min_slot_size;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            tracing::warn!(target: targets::CONFIG, width, height, "rejected min_slot_size");
            return Err(ConfigError::InvalidSlotSize { width, height });
        }

        Ok(())
    }

    /// The minimum slot size as a [`Size`].
    pub fn min_slot_size(&self) -> Size {
        Size::from(self.min_slot_size)
    }

    /// Capture the current properties of a view.
    pub fn from_view(view: &RatingView) -> Self {
        let min_slot_size = view.min_slot_size();
        Self {
            rating: view.rating(),
            min_rating: view.min_rating(),
            max_rating: view.max_rating(),
            mode: view.mode(),
            editable: view.is_editable(),
            min_slot_size: [min_slot_size.width, min_slot_size.height],
            content_mode: view.content_mode().into(),
        }
    }
}

impl RatingView {
    /// Create a rating view from a configuration.
    pub fn from_config(config: &RatingViewConfig) -> Self {
        let mut view = Self::new();
        view.apply_config(config);
        view
    }

    /// Apply every property in `config` through the regular setters.
    ///
    /// Bounds and mode are applied before the rating so that it is clamped
    /// and rounded against the configured values.
    pub fn apply_config(&mut self, config: &RatingViewConfig) {
        self.set_max_rating(config.max_rating);
        self.set_min_rating(config.min_rating);
        self.set_mode(config.mode);
        self.set_editable(config.editable);
        self.set_min_slot_size(config.min_slot_size());
        self.set_content_mode(config.content_mode.into());
        self.set_rating(config.rating);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RatingViewConfig::from_toml_str("").unwrap();
        assert_eq!(config, RatingViewConfig::default());
        assert_eq!(config.max_rating, 5);
        assert_eq!(config.min_slot_size(), Size::new(5.0, 5.0));
    }

    #[test]
    fn test_parses_all_fields() {
        let config = RatingViewConfig::from_toml_str(
            r#"
            rating = 2.5
            min_rating = 1
            max_rating = 7
            mode = "half"
            editable = false
            min_slot_size = [12.0, 10.0]
            content_mode = "stretch"
            "#,
        )
        .unwrap();

        assert_eq!(config.rating, 2.5);
        assert_eq!(config.min_rating, 1);
        assert_eq!(config.max_rating, 7);
        assert_eq!(config.mode, RatingMode::Half);
        assert!(!config.editable);
        assert_eq!(config.min_slot_size(), Size::new(12.0, 10.0));
        assert_eq!(config.content_mode, ContentMode::Stretch);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = RatingViewConfig::from_toml_str("min_rating = 6\nmax_rating = 3").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { min: 6, max: 3 }));
        assert_eq!(err.to_string(), "min_rating 6 exceeds max_rating 3");
    }

    #[test]
    fn test_rejects_excessive_slot_count() {
        let err = RatingViewConfig::from_toml_str("max_rating = 4000000000").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooManySlots {
                max: 4_000_000_000,
                limit: RatingViewConfig::MAX_SLOTS,
            }
        ));

        let at_limit = format!("max_rating = {}", RatingViewConfig::MAX_SLOTS);
        assert!(RatingViewConfig::from_toml_str(&at_limit).is_ok());
    }

    #[test]
    fn test_rejects_negative_slot_size() {
        let err = RatingViewConfig::from_toml_str("min_slot_size = [-1.0, 4.0]").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSlotSize { .. }));
    }

    #[test]
    fn test_rejects_unknown_mode_and_keys() {
        assert!(matches!(
            RatingViewConfig::from_toml_str("mode = \"quarter\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RatingViewConfig::from_toml_str("stars = 5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_config_applies_in_order() {
        let config = RatingViewConfig {
            rating: 2.6,
            min_rating: 1,
            max_rating: 3,
            mode: RatingMode::Whole,
            ..RatingViewConfig::default()
        };
        let view = RatingView::from_config(&config);

        assert_eq!(view.max_rating(), 3);
        assert_eq!(view.empty_slots().len(), 3);
        assert_eq!(view.rating(), 3.0);
    }

    #[test]
    fn test_view_round_trips_through_toml() {
        let view = RatingView::new()
            .with_max_rating(8)
            .with_mode(RatingMode::Half)
            .with_rating(4.5)
            .with_content_mode(ImageScaleMode::Center);

        let text = RatingViewConfig::from_view(&view).to_toml_string().unwrap();
        let restored = RatingView::from_config(&RatingViewConfig::from_toml_str(&text).unwrap());

        assert_eq!(restored.max_rating(), 8);
        assert_eq!(restored.mode(), RatingMode::Half);
        assert_eq!(restored.rating(), 4.5);
        assert_eq!(restored.content_mode(), ImageScaleMode::Center);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = RatingViewConfig::load("/nonexistent/rating.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
