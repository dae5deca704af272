//! Bias-free integer range mapping.
//!
//! All ranged integer draws reduce to [`Random::next_uint_below`], a
//! widening-multiply (Lemire) reduction: the raw 32-bit word is multiplied
//! into a 64-bit product whose high half is the candidate value and whose
//! low half exposes the bias. Products landing in the biased low slice are
//! rejected and redrawn, so every value in `[0, range)` is exactly equally
//! likely. Rejection probability is `(2³² mod range) / 2³²`, always below
//! 0.5, and the retry loop is capped.
//!
//! Range widths are computed in 64-bit arithmetic: the widest request,
//! `i32::MIN..i32::MAX` or `0..u32::MAX`, spans 2³² − 1 and would overflow
//! 32-bit subtraction of signed operands.

use crate::error::RandomError;

use super::{Random, MAX_REJECTIONS};

impl Random {
    /// Draws a `u32` uniform over `[0, range)` with no modulo bias.
    ///
    /// Callers guarantee `range > 0`.
    pub(crate) fn next_uint_below(&mut self, range: u32) -> Result<u32, RandomError> {
        debug_assert!(range > 0);
        // 2^32 mod range: products with a low half below this threshold
        // belong to the over-represented residue classes.
        let threshold = range.wrapping_neg() % range;
        for _ in 0..MAX_REJECTIONS {
            let wide = u64::from(self.next_state()) * u64::from(range);
            if (wide as u32) >= threshold {
                return Ok((wide >> 32) as u32);
            }
        }
        Err(RandomError::StateExhausted)
    }

    /// Draws a `u32` uniform over `[0, max)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] if `max == 0` (the interval `[0, 0)`
    /// is empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let x = rng.next_uint_max(10)?;
    /// assert!(x < 10);
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_uint_max(&mut self, max: u32) -> Result<u32, RandomError> {
        if max == 0 {
            return Err(RandomError::InvalidRange { min: 0.0, max: 0.0 });
        }
        self.next_uint_below(max)
    }

    /// Draws a `u32` uniform over `[min, max)`.
    ///
    /// Correct at the extremes: `min = 0, max = u32::MAX` spans 2³² − 1
    /// values and is handled without overflow.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] if `min >= max`.
    #[inline]
    pub fn next_uint_range(&mut self, min: u32, max: u32) -> Result<u32, RandomError> {
        if min >= max {
            return Err(RandomError::InvalidRange {
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        let width = max - min; // min < max, no underflow
        Ok(min + self.next_uint_below(width)?)
    }

    /// Draws an `i32` uniform over `[0, max)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] if `max <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(0x6E62_4EB7)?;
    /// let roll = rng.next_int_max(17)?;
    /// assert!((0..17).contains(&roll));
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_int_max(&mut self, max: i32) -> Result<i32, RandomError> {
        if max <= 0 {
            return Err(RandomError::InvalidRange {
                min: 0.0,
                max: f64::from(max),
            });
        }
        Ok(self.next_uint_below(max as u32)? as i32)
    }

    /// Draws an `i32` uniform over `[min, max)`.
    ///
    /// The width is computed in `i64`, so the full signed span
    /// `min = i32::MIN, max = i32::MAX` (width 2³² − 1) cannot overflow.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] if `min >= max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let x = rng.next_int_range(-5, 5)?;
    /// assert!((-5..5).contains(&x));
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_int_range(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        if min >= max {
            return Err(RandomError::InvalidRange {
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        let width = (i64::from(max) - i64::from(min)) as u32; // fits: width <= 2^32 - 1
        let offset = self.next_uint_below(width)?;
        Ok((i64::from(min) + i64::from(offset)) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint_max_bounds() {
        let mut rng = Random::new(3).unwrap();
        for _ in 0..10_000 {
            assert!(rng.next_uint_max(7).unwrap() < 7);
        }
    }

    #[test]
    fn test_uint_max_one_is_constant_zero() {
        let mut rng = Random::new(3).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_uint_max(1).unwrap(), 0);
        }
    }

    #[test]
    fn test_uint_full_width_extreme() {
        let mut rng = Random::new(0xCAFE_F00D).unwrap();
        for _ in 0..10_000 {
            assert!(rng.next_uint_max(u32::MAX).unwrap() < u32::MAX);
            let x = rng.next_uint_range(1, u32::MAX).unwrap();
            assert!((1..u32::MAX).contains(&x));
        }
    }

    #[test]
    fn test_int_full_width_extreme() {
        // Width i32::MAX - i32::MIN = 2^32 - 1 overflows i32; the i64
        // promotion must keep the draw in range.
        let mut rng = Random::new(0xCAFE_F00D).unwrap();
        for _ in 0..10_000 {
            let x = rng.next_int_range(i32::MIN, i32::MAX).unwrap();
            assert!(x < i32::MAX);
        }
    }

    #[test]
    fn test_negative_range() {
        let mut rng = Random::new(11).unwrap();
        for _ in 0..10_000 {
            let x = rng.next_int_range(-100, -50).unwrap();
            assert!((-100..-50).contains(&x));
        }
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let mut rng = Random::new(11).unwrap();
        assert!(matches!(
            rng.next_uint_max(0),
            Err(RandomError::InvalidRange { .. })
        ));
        assert!(matches!(
            rng.next_int_max(0),
            Err(RandomError::InvalidRange { .. })
        ));
        assert!(matches!(
            rng.next_int_max(-4),
            Err(RandomError::InvalidRange { .. })
        ));
        assert!(matches!(
            rng.next_uint_range(9, 9),
            Err(RandomError::InvalidRange { .. })
        ));
        assert!(matches!(
            rng.next_int_range(5, -5),
            Err(RandomError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_small_range_covers_all_values() {
        let mut rng = Random::new(2024).unwrap();
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            seen[rng.next_int_range(10, 15).unwrap() as usize - 10] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_int_range_stays_inside(
                seed in 1u32..,
                min in i32::MIN..i32::MAX,
                max in i32::MIN..=i32::MAX
            ) {
                prop_assume!(min < max);
                let mut rng = Random::new(seed).unwrap();
                let x = rng.next_int_range(min, max).unwrap();
                prop_assert!(x >= min && x < max);
            }

            #[test]
            fn test_uint_range_stays_inside(
                seed in 1u32..,
                min in 0u32..u32::MAX,
                max in 0u32..=u32::MAX
            ) {
                prop_assume!(min < max);
                let mut rng = Random::new(seed).unwrap();
                let x = rng.next_uint_range(min, max).unwrap();
                prop_assert!(x >= min && x < max);
            }
        }
    }
}
