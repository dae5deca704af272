//! # vectra_random: Deterministic Random Sampling
//!
//! This crate provides [`Random`], a small, seedable, deterministic
//! pseudo-random number generator producing scalar and 2/3/4-wide vector
//! values across the boolean, integer, and floating-point domains of
//! `vectra_core`, plus uniformly distributed unit directions in 2D and 3D.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the output stream is fully determined by the
//!   seed; the same seed and call pattern always produce the same values.
//! - **Value semantics**: a generator is a plain `Copy` value mutated in
//!   place by every draw. Copies diverge independently from the copy point.
//! - **Statistical contracts only**: the generator promises uniformity,
//!   cross-component independence, and bias-free range mapping; it does not
//!   promise bit compatibility with any external generator, and it is not
//!   cryptographically secure.
//!
//! ## Parallel Usage
//!
//! A `Random` instance is not safe for concurrent mutation. The supported
//! pattern for parallel work is one independently seeded instance per
//! worker, derived from the worker index:
//!
//! ```rust
//! use vectra_random::Random;
//!
//! let streams: Vec<Random> = (0..4).map(Random::from_index).collect();
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use vectra_random::Random;
//!
//! let mut rng = Random::new(0x6E62_4EB7)?;
//!
//! let coin = rng.next_bool();
//! let unit = rng.next_float();            // [0, 1)
//! let roll = rng.next_int_max(6)?;        // [0, 6)
//! let cell = rng.next_int2_range(-8, 8)?; // per-component [-8, 8)
//! let dir = rng.next_float3_direction();  // unit length
//! # let _ = (coin, roll, cell);
//! # assert!(unit >= 0.0 && unit < 1.0);
//! # assert!((dir.length() - 1.0).abs() < 1e-3);
//! # Ok::<(), vectra_random::RandomError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod generator;

pub use error::RandomError;
pub use generator::Random;
