//! Uniform unit-direction sampling on the circle and sphere.
//!
//! 2D directions draw one uniform angle in `[0, 2π)` and apply
//! sine/cosine. 3D directions use the cylinder-projection construction:
//! `z` uniform in `[-1, 1)` and an independent uniform azimuth give an
//! area-uniform point on the sphere (Archimedes' hat-box theorem), with no
//! clustering toward the poles.

use vectra_core::vector::{Double2, Double3, Float2, Float3};

use super::Random;

impl Random {
    /// Draws a uniformly distributed unit direction on the circle.
    ///
    /// The angle is uniform over `[0, 2π)`; the returned vector has unit
    /// length to single-precision accuracy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let dir = rng.next_float2_direction();
    /// assert!((dir.length() - 1.0).abs() < 1e-3);
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_float2_direction(&mut self) -> Float2 {
        let angle = self.next_float() * std::f32::consts::TAU;
        Float2::new(angle.cos(), angle.sin())
    }

    /// Draws a uniformly distributed unit direction on the sphere.
    ///
    /// Area-uniform: the polar coordinate comes from a uniform `z` in
    /// `[-1, 1)`, so solid-angle density is constant over the surface.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vectra_random::Random;
    ///
    /// let mut rng = Random::new(42)?;
    /// let dir = rng.next_float3_direction();
    /// assert!((dir.length() - 1.0).abs() < 1e-3);
    /// # Ok::<(), vectra_random::RandomError>(())
    /// ```
    #[inline]
    pub fn next_float3_direction(&mut self) -> Float3 {
        let z = self.next_float() * 2.0 - 1.0;
        let angle = self.next_float() * std::f32::consts::TAU;
        // z*z <= 1 by construction; the max(0.0) absorbs rounding.
        let planar = (1.0 - z * z).max(0.0).sqrt();
        Float3::new(planar * angle.cos(), planar * angle.sin(), z)
    }

    /// Draws a uniformly distributed unit direction on the circle in
    /// double precision.
    #[inline]
    pub fn next_double2_direction(&mut self) -> Double2 {
        let angle = self.next_double() * std::f64::consts::TAU;
        Double2::new(angle.cos(), angle.sin())
    }

    /// Draws a uniformly distributed unit direction on the sphere in
    /// double precision.
    #[inline]
    pub fn next_double3_direction(&mut self) -> Double3 {
        let z = self.next_double() * 2.0 - 1.0;
        let angle = self.next_double() * std::f64::consts::TAU;
        let planar = (1.0 - z * z).max(0.0).sqrt();
        Double3::new(planar * angle.cos(), planar * angle.sin(), z)
    }
}
