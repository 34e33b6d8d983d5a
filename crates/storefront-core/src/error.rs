//! Error types for Storefront core systems.

/// Timer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,
}
