//! Error types for Horizon Rating core systems.

use thiserror::Error;

/// Signal-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or disconnected connection ID")]
    InvalidConnection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Signal;

    #[test]
    fn test_stale_connection_reports_error() {
        let signal = Signal::<u32>::new();
        let id = signal.connect(|_| {});
        assert_eq!(signal.try_disconnect(id), Ok(()));

        let err = signal.try_disconnect(id).unwrap_err();
        assert_eq!(err, SignalError::InvalidConnection);
        assert_eq!(err.to_string(), "invalid or disconnected connection ID");
    }
}
