//! # vectra_core: Fixed-Width Vector Types
//!
//! ## Layer 1 (Foundation) Role
//!
//! vectra_core is the bottom layer of the workspace, providing the small
//! fixed-width vector types the rest of the library computes with:
//! - Boolean vectors: `Bool2`, `Bool3`, `Bool4`
//! - Signed integer vectors: `Int2`, `Int3`, `Int4`
//! - Unsigned integer vectors: `UInt2`, `UInt3`, `UInt4`
//! - Single-precision vectors: `Float2`, `Float3`, `Float4`
//! - Double-precision vectors: `Double2`, `Double3`, `Double4`
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vectra_* crates, with minimal
//! external dependencies:
//! - serde: Serialisation support for all vector types
//!
//! ## Usage Examples
//!
//! ```rust
//! use vectra_core::vector::{Float3, Int2};
//!
//! let v = Float3::new(3.0, 0.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! // Scalars splat into vectors
//! let bounds: Int2 = 10.into();
//! assert_eq!(bounds, Int2::new(10, 10));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod vector;

pub use vector::{
    Bool2, Bool3, Bool4, Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4,
    UInt2, UInt3, UInt4,
};
