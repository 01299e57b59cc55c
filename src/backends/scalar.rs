//! Scalar reference kernels for the 4-wide operations.
//!
//! These are the hand-unrolled per-field forms. They work on any platform
//! and serve as the reference implementation the packed backends are tested
//! against, so they stay compiled even when a SIMD backend is active.

use crate::support::{abs, sgn};
use crate::vec4::Vec4;

/// Absolute value of each component: sign bit cleared, NaN payloads
/// preserved.
#[inline(always)]
pub fn abs_vec4f(v: Vec4<f32>) -> Vec4<f32> {
    Vec4::new(abs(v.x), abs(v.y), abs(v.z), abs(v.w))
}

/// Sign of each component via the sign-bit trick: `-1.0` or `+1.0`, never
/// zero.
#[inline(always)]
pub fn sgn_vec4f(v: Vec4<f32>) -> Vec4<f32> {
    Vec4::new(sgn(v.x), sgn(v.y), sgn(v.z), sgn(v.w))
}

/// Absolute value of each component, wrapping at `i32::MIN`.
#[inline(always)]
pub fn abs_vec4i(v: Vec4<i32>) -> Vec4<i32> {
    Vec4::new(abs(v.x), abs(v.y), abs(v.z), abs(v.w))
}

// TODO: a packed sgn_vec4i (two compares, a subtract) once a caller shows up
// that is hot enough to care.
