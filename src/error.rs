use thiserror::Error;

/// Reasons a distribution is rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    /// The value and probability sequences differ in length.
    #[error("length mismatch: {values} values but {probabilities} probabilities")]
    LengthMismatch { values: usize, probabilities: usize },

    /// A probability is below zero.
    #[error("negative probability {probability} at index {index}")]
    NegativeProbability { index: usize, probability: f64 },

    /// A probability is NaN.
    #[error("probability at index {index} is not a number")]
    NotANumber { index: usize },

    /// The tolerance is negative or NaN.
    #[error("invalid tolerance {0}: must be a non-negative number")]
    InvalidTolerance(f64),

    /// The probabilities sum to more than `tolerance` away from 1.
    #[error("probabilities do not sum to 1: sum {sum} is outside tolerance {tolerance}")]
    SumOutOfTolerance { sum: f64, tolerance: f64 },
}

/// A uniform draw landed at or beyond the last cumulative boundary.
///
/// Only reachable when the probabilities sum to slightly less than 1. Drawing
/// again with a fresh value is the expected mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("distribution exhausted: draw {draw} is not below cumulative total {total}")]
pub struct Exhausted {
    pub draw: f64,
    pub total: f64,
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    Exhausted(#[from] Exhausted),
}

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
