//! Kernels for the 4-wide fast paths, selected at compile time.
//!
//! Every operation here exists in two interchangeable forms with one public
//! surface: the [`scalar`] module holds the hand-unrolled per-field
//! reference kernels and is compiled on every target; the [`sse`] and
//! [`neon`] modules hold the packed 128-bit forms and are compiled only when
//! the `simd` feature is enabled on a matching architecture. Which form the
//! crate re-exports is decided entirely by `cfg`, never at runtime, and the
//! two must be value-equivalent for all inputs (held by the equivalence
//! suite in `tests/backend_equivalence.rs`).

pub mod scalar;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod sse;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub mod neon;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub use sse::{abs_vec4f, abs_vec4i, sgn_vec4f};

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub use neon::{abs_vec4f, abs_vec4i, sgn_vec4f};

#[cfg(not(all(
    feature = "simd",
    any(target_arch = "x86_64", target_arch = "aarch64")
)))]
pub use scalar::{abs_vec4f, abs_vec4i, sgn_vec4f};
