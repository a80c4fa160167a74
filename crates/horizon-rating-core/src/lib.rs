//! Core systems for Horizon Rating.
//!
//! This crate provides the foundational pieces shared by the rating widget
//! crates:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Errors**: `thiserror`-based error enums
//! - **Logging**: `tracing` target and span name constants
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_rating_core::Signal;
//!
//! let value_changed = Signal::<f64>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(3.5);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::SignalError;
pub use signal::{ConnectionId, Signal};
