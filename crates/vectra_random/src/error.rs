//! Error types for random sampling operations.

use thiserror::Error;

/// Categorised sampling errors.
///
/// # Variants
/// - `InvalidSeed`: zero seed passed to [`Random::new`](crate::Random::new)
/// - `InvalidRange`: empty or inverted sampling interval
/// - `StateExhausted`: internal rejection loop exceeded its cap
///
/// # Examples
/// ```
/// use vectra_random::{Random, RandomError};
///
/// let err = Random::new(0).unwrap_err();
/// assert_eq!(err, RandomError::InvalidSeed);
///
/// let mut rng = Random::new(42).unwrap();
/// let err = rng.next_int_range(5, 5).unwrap_err();
/// assert!(matches!(err, RandomError::InvalidRange { .. }));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RandomError {
    /// Zero seed requested. The all-zero word is the fixed point of the
    /// state transition, so it can never enter the stream.
    #[error("Seed must be non-zero")]
    InvalidSeed,

    /// `min >= max`: the half-open interval `[min, max)` is empty.
    ///
    /// Bounds are reported as `f64`; every `i32`, `u32`, `f32`, and `f64`
    /// bound is representable without loss of ordering.
    #[error("Invalid sampling range: min {min} >= max {max}")]
    InvalidRange {
        /// Inclusive lower bound of the requested interval.
        min: f64,
        /// Exclusive upper bound of the requested interval.
        max: f64,
    },

    /// The bounded rejection loop exceeded its retry cap. Unreachable with
    /// a healthy state core; indicates internal state corruption.
    #[error("Rejection sampling exceeded the retry cap; generator state is degenerate")]
    StateExhausted,
}
