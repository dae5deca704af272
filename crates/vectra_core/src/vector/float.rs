//! Single-precision vector types.
//!
//! # Examples
//!
//! ```
//! use vectra_core::vector::Float2;
//!
//! let v = Float2::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let unit = v.normalized();
//! assert!((unit.length() - 1.0).abs() < 1e-6);
//! ```

use super::{define_vector, impl_component_ops, impl_float_geometry};

define_vector!(
    /// A 2-component single-precision vector.
    Float2, f32, [x, y]
);
define_vector!(
    /// A 3-component single-precision vector.
    Float3, f32, [x, y, z]
);
define_vector!(
    /// A 4-component single-precision vector.
    Float4, f32, [x, y, z, w]
);

impl_component_ops!(Float2, f32, [x, y]);
impl_component_ops!(Float3, f32, [x, y, z]);
impl_component_ops!(Float4, f32, [x, y, z, w]);

impl_float_geometry!(Float2, f32, [x, y]);
impl_float_geometry!(Float3, f32, [x, y, z]);
impl_float_geometry!(Float4, f32, [x, y, z, w]);
