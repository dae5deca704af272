//! Boolean vector types.
//!
//! # Examples
//!
//! ```
//! use vectra_core::vector::Bool3;
//!
//! let mask = Bool3::new(true, false, true);
//! assert!(mask.any());
//! assert!(!mask.all());
//! ```

use super::define_vector;

define_vector!(
    /// A 2-component boolean vector.
    Bool2, bool, [x, y]
);
define_vector!(
    /// A 3-component boolean vector.
    Bool3, bool, [x, y, z]
);
define_vector!(
    /// A 4-component boolean vector.
    Bool4, bool, [x, y, z, w]
);

impl Eq for Bool2 {}
impl Eq for Bool3 {}
impl Eq for Bool4 {}

/// Implements `any`/`all` mask reductions.
macro_rules! impl_mask_reductions {
    ($name:ident, [$($comp:ident),+]) => {
        impl $name {
            /// Returns `true` if any component is `true`.
            #[inline]
            pub const fn any(self) -> bool {
                false $(|| self.$comp)+
            }

            /// Returns `true` if every component is `true`.
            #[inline]
            pub const fn all(self) -> bool {
                true $(&& self.$comp)+
            }
        }
    };
}

impl_mask_reductions!(Bool2, [x, y]);
impl_mask_reductions!(Bool3, [x, y, z]);
impl_mask_reductions!(Bool4, [x, y, z, w]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reductions() {
        assert!(Bool2::new(false, true).any());
        assert!(!Bool2::new(false, false).any());
        assert!(Bool4::splat(true).all());
        assert!(!Bool4::new(true, true, false, true).all());
    }

    #[test]
    fn test_splat_conversion() {
        let mask: Bool3 = true.into();
        assert_eq!(mask, Bool3::new(true, true, true));
    }
}
