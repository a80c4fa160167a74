//! Logging facilities for Horizon Rating.
//!
//! Horizon Rating uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; applications opt in:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_rating=debug")
//!     .init();
//! ```
//!
//! Use the constants in [`targets`] to filter logs for a specific subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_rating_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_rating_core::signal";
    /// Widget base and child management target.
    pub const WIDGET: &str = "horizon_rating::widget";
    /// Rating view slot management and value changes.
    pub const RATING: &str = "horizon_rating::rating_view";
    /// Layout passes.
    pub const LAYOUT: &str = "horizon_rating::layout";
    /// Touch input conversion and dispatch.
    pub const TOUCH: &str = "horizon_rating::touch";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_rating::config";
}

/// Span names used throughout Horizon Rating for tracing.
pub mod span_names {
    /// Layout pass span.
    pub const LAYOUT: &str = "horizon_rating::layout";
    /// Touch handling span.
    pub const TOUCH: &str = "horizon_rating::touch";
}
