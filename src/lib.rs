#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! lumen-math: fixed-size vector and quaternion algebra with interchangeable
//! scalar and SIMD implementations.
//!
//! The kernel is built from three cooperating facets:
//!
//! - [`Vector<T, N>`](Vector): generic N-wide vectors for any compile-time
//!   dimension, loop-based reference semantics
//! - [`Vec2`], [`Vec3`], [`Vec4`]: hand-unrolled 2/3/4-wide vectors with
//!   named fields, the 4-wide form 16-byte aligned for vectorized load/store
//! - [`Quat`]: quaternion algebra on top of the 4-wide vector
//!
//! Every operation with a vectorized fast path keeps a scalar kernel as the
//! reference implementation; which one runs is decided purely at compile
//! time (`simd` feature + target architecture), never by runtime dispatch.
//! The two are held equivalent by the property tests in `tests/`.

#[cfg(feature = "std")]
extern crate std;

// Element-type abstractions
pub mod traits;

// Generic N-wide vectors
pub mod vector;

// Specialized widths
pub mod vec2;
pub mod vec3;
pub mod vec4;

// Quaternions
pub mod quat;

// abs/sgn/lerp/clamp and friends
pub mod support;

// Scalar and vectorized kernels for the 4-wide fast paths
pub mod backends;

// FNV-1a string hashing
pub mod hash;

// Stdout sink for the `log` facade
#[cfg(feature = "std")]
pub mod logger;

pub use quat::Quat;
pub use support::{abs, approx_equal, clamp, lerp, sgn, Sign};
pub use traits::{Real, Scalar};
pub use vec2::{Vec2, Vec2f, Vec2i};
pub use vec3::{Vec3, Vec3f, Vec3i};
pub use vec4::{Vec4, Vec4f, Vec4i};
pub use vector::Vector;
