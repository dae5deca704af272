//! Unsigned 32-bit integer vector types.

use super::{define_vector, impl_component_ops};

define_vector!(
    /// A 2-component `u32` vector.
    UInt2, u32, [x, y]
);
define_vector!(
    /// A 3-component `u32` vector.
    UInt3, u32, [x, y, z]
);
define_vector!(
    /// A 4-component `u32` vector.
    UInt4, u32, [x, y, z, w]
);

impl Eq for UInt2 {}
impl Eq for UInt3 {}
impl Eq for UInt4 {}

impl_component_ops!(UInt2, u32, [x, y]);
impl_component_ops!(UInt3, u32, [x, y, z]);
impl_component_ops!(UInt4, u32, [x, y, z, w]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_splat() {
        assert_eq!(UInt3::new(1, 2, 3).z, 3);
        assert_eq!(UInt2::splat(7), UInt2::new(7, 7));
        let v: UInt4 = 100.into();
        assert_eq!(v, UInt4::new(100, 100, 100, 100));
    }

    #[test]
    fn test_component_ops() {
        let a = UInt2::new(10, 20);
        let b = UInt2::new(1, 2);
        assert_eq!(a - b, UInt2::new(9, 18));
        assert_eq!(a * 2, UInt2::new(20, 40));
    }
}
