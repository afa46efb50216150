//! Errors for the router parameters.

use thiserror::Error;

/// Error while creating or validating router parameters.
#[derive(Debug, Clone, Error)]
pub enum ParamsError {
    /// Basis-point rate exceeds the denominator (100%).
    #[error("basis points must be at most 10000, got {0}")]
    BpsOutOfRange(u16),
}
