//! NEON kernels for the 4-wide operations (aarch64).
//!
//! NEON is mandatory on aarch64, so no feature detection is needed. The
//! float kernels are the same sign-bit manipulations as the SSE ones,
//! expressed through `u32` reinterpret casts; `FABS`/`ABS` are bitwise on
//! this path too, so NaN payloads and `i32::MIN` wrapping match the scalar
//! reference exactly.

#![cfg(target_arch = "aarch64")]

use core::arch::aarch64::*;

use crate::vec4::Vec4;

const SIGN_MASK_F32: u32 = 0x8000_0000;
const ONE_BITS_F32: u32 = 0x3F80_0000;

/// Absolute value of each component: sign bit cleared, NaN payloads
/// preserved.
#[inline(always)]
pub fn abs_vec4f(mut v: Vec4<f32>) -> Vec4<f32> {
    unsafe {
        let reg = vld1q_f32(v.as_ptr());
        let out = vabsq_f32(reg);
        vst1q_f32(v.as_mut_ptr(), out);
    }
    v
}

/// Sign of each component: the input's sign bit OR'd onto a constant `1.0`,
/// giving `-1.0` or `+1.0` per lane, never zero.
#[inline(always)]
pub fn sgn_vec4f(mut v: Vec4<f32>) -> Vec4<f32> {
    unsafe {
        let bits = vreinterpretq_u32_f32(vld1q_f32(v.as_ptr()));
        let sign = vandq_u32(bits, vdupq_n_u32(SIGN_MASK_F32));
        let out = vorrq_u32(sign, vdupq_n_u32(ONE_BITS_F32));
        vst1q_f32(v.as_mut_ptr(), vreinterpretq_f32_u32(out));
    }
    v
}

/// Absolute value of each component, wrapping at `i32::MIN` exactly like the
/// packed instruction does.
#[inline(always)]
pub fn abs_vec4i(mut v: Vec4<i32>) -> Vec4<i32> {
    unsafe {
        let reg = vld1q_s32(v.as_ptr());
        let out = vabsq_s32(reg);
        vst1q_s32(v.as_mut_ptr(), out);
    }
    v
}
