//! Scalar extraction: mapping raw state words onto boolean, integer, and
//! floating-point values.
//!
//! Every draw consumes exactly one raw word, except `next_double` and
//! `next_double_range`, which consume two to fill the 53-bit mantissa.

use crate::error::RandomError;

use super::{Random, MAX_REJECTIONS};

/// Scale factor mapping a 24-bit integer onto `[0, 1)` in `f32`.
const FLOAT_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Scale factor mapping a 53-bit integer onto `[0, 1)` in `f64`.
const DOUBLE_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

impl Random {
    /// Draws a boolean with P(`true`) = P(`false`) = 0.5.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let _coin: bool = rng.next_bool();
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        (self.next_state() & 1) == 1
    }

    /// Draws a `u32` uniform over the full unsigned range.
    #[inline]
    pub fn next_uint(&mut self) -> u32 {
        self.next_state()
    }

    /// Draws an `i32` uniform over the full signed range, including
    /// `i32::MIN`.
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.next_state() as i32
    }

    /// Draws an `f32` uniform over `[0, 1)`.
    ///
    /// The raw word's top 24 bits are scaled by 2⁻²⁴, so the result lies
    /// exactly on the finest grid a single-precision value in `[0, 1)` can
    /// represent uniformly. Randomness is spread across the whole value:
    /// both `frac(x)` at full scale and `frac(x · 65536)` remain uniform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let x = rng.next_float();
    /// assert!((0.0..1.0).contains(&x));
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        (self.next_state() >> 8) as f32 * FLOAT_SCALE
    }

    /// Draws an `f64` uniform over `[0, 1)`.
    ///
    /// Combines two raw words into 53 mantissa bits scaled by 2⁻⁵³, so the
    /// full double-precision resolution of `[0, 1)` is populated.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        let hi = u64::from(self.next_state());
        let lo = u64::from(self.next_state());
        (((hi << 32) | lo) >> 11) as f64 * DOUBLE_SCALE
    }

    /// Draws an `f32` uniform over `[min, max)`.
    ///
    /// The interval arithmetic runs in `f64` so the span cannot overflow for
    /// any finite `f32` bounds. A draw that rounds up onto `max` is
    /// discarded and retried; the retry loop is capped.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] unless `min < max` (NaN bounds fail
    /// this comparison and are rejected).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let x = rng.next_float_range(-2.0, 2.0)?;
    /// assert!((-2.0..2.0).contains(&x));
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    pub fn next_float_range(&mut self, min: f32, max: f32) -> Result<f32, RandomError> {
        if !(min < max) {
            return Err(RandomError::InvalidRange {
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        let span = f64::from(max) - f64::from(min);
        for _ in 0..MAX_REJECTIONS {
            let v = (f64::from(min) + f64::from(self.next_float()) * span) as f32;
            if v >= min && v < max {
                return Ok(v);
            }
        }
        Err(RandomError::StateExhausted)
    }

    /// Draws an `f32` uniform over `[0, max)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] unless `max > 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let x = rng.next_float_max(2.5)?;
    /// assert!((0.0..2.5).contains(&x));
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_float_max(&mut self, max: f32) -> Result<f32, RandomError> {
        self.next_float_range(0.0, max)
    }

    /// Draws an `f64` uniform over `[0, max)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] unless `max > 0`.
    #[inline]
    pub fn next_double_max(&mut self, max: f64) -> Result<f64, RandomError> {
        self.next_double_range(0.0, max)
    }

    /// Draws an `f64` uniform over `[min, max)`.
    ///
    /// Interpolates `min * (1 - t) + max * t` rather than offsetting by the
    /// span, so `max - min` exceeding `f64::MAX` (e.g. `f64::MIN..f64::MAX`)
    /// cannot overflow. A draw that rounds onto `max` is discarded and
    /// retried.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] unless `min < max`.
    pub fn next_double_range(&mut self, min: f64, max: f64) -> Result<f64, RandomError> {
        if !(min < max) {
            return Err(RandomError::InvalidRange { min, max });
        }
        for _ in 0..MAX_REJECTIONS {
            let t = self.next_double();
            let v = min * (1.0 - t) + max * t;
            if v >= min && v < max {
                return Ok(v);
            }
        }
        Err(RandomError::StateExhausted)
    }
}
