//! Fixed-width 2/3/4-component vector types.
//!
//! This module provides:
//! - `boolean`: `Bool2`, `Bool3`, `Bool4`
//! - `int`: `Int2`, `Int3`, `Int4` (component type `i32`)
//! - `uint`: `UInt2`, `UInt3`, `UInt4` (component type `u32`)
//! - `float`: `Float2`, `Float3`, `Float4` (component type `f32`)
//! - `double`: `Double2`, `Double3`, `Double4` (component type `f64`)
//!
//! All types are plain `Copy` structs with public named components and a
//! `From<scalar>` splat conversion, so APIs taking per-component bounds can
//! also accept a single scalar.
//!
//! # Re-exports
//!
//! Every vector type is re-exported at this module level.

/// Defines a vector struct with public components, `new`, `splat`, and a
/// splat `From<scalar>` conversion.
macro_rules! define_vector {
    (
        $(#[$meta:meta])*
        $name:ident, $scalar:ty, [$($comp:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                #[doc = concat!("The `", stringify!($comp), "` component.")]
                pub $comp: $scalar,
            )+
        }

        impl $name {
            /// Creates a vector from individual component values.
            #[inline]
            pub const fn new($($comp: $scalar),+) -> Self {
                Self { $($comp),+ }
            }

            /// Creates a vector with every component set to `value`.
            #[inline]
            pub const fn splat(value: $scalar) -> Self {
                Self { $($comp: value),+ }
            }
        }

        impl From<$scalar> for $name {
            /// Splats the scalar into every component.
            #[inline]
            fn from(value: $scalar) -> Self {
                Self::splat(value)
            }
        }
    };
}

/// Implements component-wise `Add`, `Sub`, and `Mul` plus scalar `Mul`.
macro_rules! impl_component_ops {
    ($name:ident, $scalar:ty, [$($comp:ident),+]) => {
        impl core::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp + rhs.$comp),+ }
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp - rhs.$comp),+ }
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp * rhs.$comp),+ }
            }
        }

        impl core::ops::Mul<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self {
                Self { $($comp: self.$comp * rhs),+ }
            }
        }
    };
}

/// Implements the floating-point geometry helpers (`dot`, `length`,
/// `length_squared`, `normalized`) and unary negation.
macro_rules! impl_float_geometry {
    ($name:ident, $scalar:ty, [$($comp:ident),+]) => {
        impl $name {
            /// Dot product with `rhs`.
            #[inline]
            pub fn dot(self, rhs: Self) -> $scalar {
                0.0 $(+ self.$comp * rhs.$comp)+
            }

            /// Squared Euclidean length.
            #[inline]
            pub fn length_squared(self) -> $scalar {
                self.dot(self)
            }

            /// Euclidean length.
            #[inline]
            pub fn length(self) -> $scalar {
                self.length_squared().sqrt()
            }

            /// Returns the unit vector pointing in the same direction.
            ///
            /// The zero vector has no direction; callers must not pass it.
            #[inline]
            pub fn normalized(self) -> Self {
                let inv = 1.0 / self.length();
                Self { $($comp: self.$comp * inv),+ }
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($comp: -self.$comp),+ }
            }
        }
    };
}

pub(crate) use define_vector;
pub(crate) use impl_component_ops;
pub(crate) use impl_float_geometry;

pub mod boolean;
pub mod double;
pub mod float;
pub mod int;
pub mod uint;

pub use boolean::{Bool2, Bool3, Bool4};
pub use double::{Double2, Double3, Double4};
pub use float::{Float2, Float3, Float4};
pub use int::{Int2, Int3, Int4};
pub use uint::{UInt2, UInt3, UInt4};
