//! Vector composition: 2/3/4-wide draws built from independent scalars.
//!
//! Each vector draw pulls one scalar per component from the shared stream,
//! in component order (`x`, `y`, `z`, `w`), so an N-wide draw advances the
//! state exactly as N scalar draws would. Components of a single draw are
//! therefore as independent as consecutive scalar draws.
//!
//! Ranged forms take per-component bounds as vectors; a plain scalar splats
//! into all components via `Into`. If any component's bounds are invalid
//! the state is restored to its value before the call, so a failed draw
//! consumes nothing from the stream.

use vectra_core::vector::{
    Bool2, Bool3, Bool4, Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4,
    UInt2, UInt3, UInt4,
};

use crate::error::RandomError;

use super::Random;

/// Generates an unbounded N-wide draw from an infallible scalar draw.
macro_rules! vector_draw {
    ($(#[$meta:meta])* $name:ident, $scalar_fn:ident, $vec:ident, [$($comp:ident),+]) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&mut self) -> $vec {
            $(let $comp = self.$scalar_fn();)+
            $vec::new($($comp),+)
        }
    };
}

/// Generates a bounded N-wide draw from a fallible one-argument scalar draw.
macro_rules! vector_draw_max {
    ($(#[$meta:meta])* $name:ident, $scalar_fn:ident, $vec:ident, [$($comp:ident),+]) => {
        $(#[$meta])*
        pub fn $name(&mut self, max: impl Into<$vec>) -> Result<$vec, RandomError> {
            let max = max.into();
            let saved = *self;
            $(
                let $comp = match self.$scalar_fn(max.$comp) {
                    Ok(value) => value,
                    Err(err) => {
                        *self = saved;
                        return Err(err);
                    }
                };
            )+
            Ok($vec::new($($comp),+))
        }
    };
}

/// Generates a bounded N-wide draw from a fallible two-argument scalar draw.
macro_rules! vector_draw_range {
    ($(#[$meta:meta])* $name:ident, $scalar_fn:ident, $vec:ident, [$($comp:ident),+]) => {
        $(#[$meta])*
        pub fn $name(
            &mut self,
            min: impl Into<$vec>,
            max: impl Into<$vec>,
        ) -> Result<$vec, RandomError> {
            let min = min.into();
            let max = max.into();
            let saved = *self;
            $(
                let $comp = match self.$scalar_fn(min.$comp, max.$comp) {
                    Ok(value) => value,
                    Err(err) => {
                        *self = saved;
                        return Err(err);
                    }
                };
            )+
            Ok($vec::new($($comp),+))
        }
    };
}

impl Random {
    vector_draw!(
        /// Draws a [`Bool2`] of independent fair booleans.
        next_bool2, next_bool, Bool2, [x, y]
    );
    vector_draw!(
        /// Draws a [`Bool3`] of independent fair booleans.
        next_bool3, next_bool, Bool3, [x, y, z]
    );
    vector_draw!(
        /// Draws a [`Bool4`] of independent fair booleans.
        next_bool4, next_bool, Bool4, [x, y, z, w]
    );

    vector_draw!(
        /// Draws an [`Int2`] uniform over the full signed range per component.
        next_int2, next_int, Int2, [x, y]
    );
    vector_draw!(
        /// Draws an [`Int3`] uniform over the full signed range per component.
        next_int3, next_int, Int3, [x, y, z]
    );
    vector_draw!(
        /// Draws an [`Int4`] uniform over the full signed range per component.
        next_int4, next_int, Int4, [x, y, z, w]
    );

    vector_draw!(
        /// Draws a [`UInt2`] uniform over the full unsigned range per component.
        next_uint2, next_uint, UInt2, [x, y]
    );
    vector_draw!(
        /// Draws a [`UInt3`] uniform over the full unsigned range per component.
        next_uint3, next_uint, UInt3, [x, y, z]
    );
    vector_draw!(
        /// Draws a [`UInt4`] uniform over the full unsigned range per component.
        next_uint4, next_uint, UInt4, [x, y, z, w]
    );

    vector_draw!(
        /// Draws a [`Float2`] uniform over `[0, 1)` per component.
        next_float2, next_float, Float2, [x, y]
    );
    vector_draw!(
        /// Draws a [`Float3`] uniform over `[0, 1)` per component.
        next_float3, next_float, Float3, [x, y, z]
    );
    vector_draw!(
        /// Draws a [`Float4`] uniform over `[0, 1)` per component.
        next_float4, next_float, Float4, [x, y, z, w]
    );

    vector_draw!(
        /// Draws a [`Double2`] uniform over `[0, 1)` per component.
        next_double2, next_double, Double2, [x, y]
    );
    vector_draw!(
        /// Draws a [`Double3`] uniform over `[0, 1)` per component.
        next_double3, next_double, Double3, [x, y, z]
    );
    vector_draw!(
        /// Draws a [`Double4`] uniform over `[0, 1)` per component.
        next_double4, next_double, Double4, [x, y, z, w]
    );

    vector_draw_max!(
        /// Draws an [`Int2`] uniform over `[0, max)` per component.
        ///
        /// `max` may be a scalar (splat) or per-component bounds:
        ///
        /// ```rust
        /// use vectra_core::vector::Int2;
        /// use vectra_random::Random;
        ///
        /// let mut rng = Random::new(42)?;
        /// let a = rng.next_int2_max(10)?;                  // [0, 10) both
        /// let b = rng.next_int2_max(Int2::new(4, 1000))?;  // per component
        /// # let _ = (a, b);
        /// # Ok::<(), vectra_random::RandomError>(())
        /// ```
        next_int2_max, next_int_max, Int2, [x, y]
    );
    vector_draw_max!(
        /// Draws an [`Int3`] uniform over `[0, max)` per component.
        next_int3_max, next_int_max, Int3, [x, y, z]
    );
    vector_draw_max!(
        /// Draws an [`Int4`] uniform over `[0, max)` per component.
        next_int4_max, next_int_max, Int4, [x, y, z, w]
    );

    vector_draw_range!(
        /// Draws an [`Int2`] uniform over `[min, max)` per component.
        next_int2_range, next_int_range, Int2, [x, y]
    );
    vector_draw_range!(
        /// Draws an [`Int3`] uniform over `[min, max)` per component.
        next_int3_range, next_int_range, Int3, [x, y, z]
    );
    vector_draw_range!(
        /// Draws an [`Int4`] uniform over `[min, max)` per component.
        next_int4_range, next_int_range, Int4, [x, y, z, w]
    );

    vector_draw_max!(
        /// Draws a [`UInt2`] uniform over `[0, max)` per component.
        next_uint2_max, next_uint_max, UInt2, [x, y]
    );
    vector_draw_max!(
        /// Draws a [`UInt3`] uniform over `[0, max)` per component.
        next_uint3_max, next_uint_max, UInt3, [x, y, z]
    );
    vector_draw_max!(
        /// Draws a [`UInt4`] uniform over `[0, max)` per component.
        next_uint4_max, next_uint_max, UInt4, [x, y, z, w]
    );

    vector_draw_range!(
        /// Draws a [`UInt2`] uniform over `[min, max)` per component.
        next_uint2_range, next_uint_range, UInt2, [x, y]
    );
    vector_draw_range!(
        /// Draws a [`UInt3`] uniform over `[min, max)` per component.
        next_uint3_range, next_uint_range, UInt3, [x, y, z]
    );
    vector_draw_range!(
        /// Draws a [`UInt4`] uniform over `[min, max)` per component.
        next_uint4_range, next_uint_range, UInt4, [x, y, z, w]
    );

    vector_draw_max!(
        /// Draws a [`Float2`] uniform over `[0, max)` per component.
        next_float2_max, next_float_max, Float2, [x, y]
    );
    vector_draw_max!(
        /// Draws a [`Float3`] uniform over `[0, max)` per component.
        next_float3_max, next_float_max, Float3, [x, y, z]
    );
    vector_draw_max!(
        /// Draws a [`Float4`] uniform over `[0, max)` per component.
        next_float4_max, next_float_max, Float4, [x, y, z, w]
    );

    vector_draw_max!(
        /// Draws a [`Double2`] uniform over `[0, max)` per component.
        next_double2_max, next_double_max, Double2, [x, y]
    );
    vector_draw_max!(
        /// Draws a [`Double3`] uniform over `[0, max)` per component.
        next_double3_max, next_double_max, Double3, [x, y, z]
    );
    vector_draw_max!(
        /// Draws a [`Double4`] uniform over `[0, max)` per component.
        next_double4_max, next_double_max, Double4, [x, y, z, w]
    );

    vector_draw_range!(
        /// Draws a [`Float2`] uniform over `[min, max)` per component.
        next_float2_range, next_float_range, Float2, [x, y]
    );
    vector_draw_range!(
        /// Draws a [`Float3`] uniform over `[min, max)` per component.
        next_float3_range, next_float_range, Float3, [x, y, z]
    );
    vector_draw_range!(
        /// Draws a [`Float4`] uniform over `[min, max)` per component.
        next_float4_range, next_float_range, Float4, [x, y, z, w]
    );

    vector_draw_range!(
        /// Draws a [`Double2`] uniform over `[min, max)` per component.
        next_double2_range, next_double_range, Double2, [x, y]
    );
    vector_draw_range!(
        /// Draws a [`Double3`] uniform over `[min, max)` per component.
        next_double3_range, next_double_range, Double3, [x, y, z]
    );
    vector_draw_range!(
        /// Draws a [`Double4`] uniform over `[min, max)` per component.
        next_double4_range, next_double_range, Double4, [x, y, z, w]
    );
}
