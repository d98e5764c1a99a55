//! Error taxonomy for degenerate simulation input.

use thiserror::Error;

/// Rejected simulation input, raised before any tick is simulated.
///
/// Numerical degeneracy during aggregation (empty series, zero theoretical
/// power) is never surfaced through this type; it falls back to zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("numChargePoints must be a positive integer")]
    NoChargePoints,

    #[error("numChargePoints must be a whole number, got {value}")]
    FractionalChargePoints { value: f64 },

    #[error("numChargePoints must be at most {max}, got {value}")]
    TooManyChargePoints { value: f64, max: u32 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("a weighted distribution needs at least one outcome")]
    EmptyDistribution,

    #[error("{outcomes} outcomes but {weights} weights")]
    WeightCountMismatch { outcomes: usize, weights: usize },

    #[error("weight #{index} must be finite and >= 0, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },
}

impl ConfigurationError {
    /// Name of the offending input field, when the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NoChargePoints
            | Self::FractionalChargePoints { .. }
            | Self::TooManyChargePoints { .. } => Some("numChargePoints"),
            Self::NonFinite { field }
            | Self::NonPositive { field, .. }
            | Self::Negative { field, .. } => Some(field),
            Self::EmptyDistribution
            | Self::WeightCountMismatch { .. }
            | Self::InvalidWeight { .. } => None,
        }
    }
}
