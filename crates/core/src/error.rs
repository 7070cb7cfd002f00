//! Error types for the fire simulation core.

use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// All errors are reported synchronously to the caller; the core never
/// retries or falls back silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FireSimError {
    /// A fuel code string was not one of the 18 FBP fuel types.
    #[error("unknown fuel type: {0}")]
    UnknownFuelType(String),

    /// A month outside 1-12 was passed to a DMC/DC calculation.
    #[error("month out of range: {0} (expected 1-12)")]
    MonthOutOfRange(u32),

    /// A simulation configuration violated its documented bounds.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid cell data did not match the declared rows x cols shape.
    #[error("grid shape mismatch: expected {expected} cells, got {actual}")]
    GridShape { expected: usize, actual: usize },
}
