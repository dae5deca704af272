//! Double-precision vector types.

use super::{define_vector, impl_component_ops, impl_float_geometry};

define_vector!(
    /// A 2-component double-precision vector.
    Double2, f64, [x, y]
);
define_vector!(
    /// A 3-component double-precision vector.
    Double3, f64, [x, y, z]
);
define_vector!(
    /// A 4-component double-precision vector.
    Double4, f64, [x, y, z, w]
);

impl_component_ops!(Double2, f64, [x, y]);
impl_component_ops!(Double3, f64, [x, y, z]);
impl_component_ops!(Double4, f64, [x, y, z, w]);

impl_float_geometry!(Double2, f64, [x, y]);
impl_float_geometry!(Double3, f64, [x, y, z]);
impl_float_geometry!(Double4, f64, [x, y, z, w]);
