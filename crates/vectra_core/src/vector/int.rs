//! Signed 32-bit integer vector types.
//!
//! # Examples
//!
//! ```
//! use vectra_core::vector::Int3;
//!
//! let lo = Int3::splat(-5);
//! let hi = Int3::new(5, 10, 15);
//! assert_eq!(hi - lo, Int3::new(10, 15, 20));
//! ```

use super::{define_vector, impl_component_ops};

define_vector!(
    /// A 2-component `i32` vector.
    Int2, i32, [x, y]
);
define_vector!(
    /// A 3-component `i32` vector.
    Int3, i32, [x, y, z]
);
define_vector!(
    /// A 4-component `i32` vector.
    Int4, i32, [x, y, z, w]
);

impl Eq for Int2 {}
impl Eq for Int3 {}
impl Eq for Int4 {}

impl_component_ops!(Int2, i32, [x, y]);
impl_component_ops!(Int3, i32, [x, y, z]);
impl_component_ops!(Int4, i32, [x, y, z, w]);
