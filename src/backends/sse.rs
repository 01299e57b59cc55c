//! SSE kernels for the 4-wide operations (x86_64).
//!
//! SSE2 is part of the x86_64 baseline, so these compile and run on every
//! x86_64 CPU; the packed integer absolute value additionally uses SSSE3
//! when it is enabled at compile time and an SSE2-only expression with the
//! same bit-for-bit result otherwise. All loads and stores are aligned;
//! `Vec4` storage is 16-byte aligned by construction.

#![cfg(target_arch = "x86_64")]

use core::arch::x86_64::*;

use crate::vec4::Vec4;

/// Absolute value of each component: bitwise AND-NOT of the sign-bit mask,
/// `(~(-0.0)) & value`. Sign cleared, NaN payloads preserved.
#[inline(always)]
pub fn abs_vec4f(mut v: Vec4<f32>) -> Vec4<f32> {
    unsafe {
        let sign_bit_mask = _mm_set1_ps(-0.0);
        let reg = _mm_load_ps(v.as_ptr());
        let reg = _mm_andnot_ps(sign_bit_mask, reg);
        _mm_store_ps(v.as_mut_ptr(), reg);
    }
    v
}

/// Sign of each component: the input's sign bit OR'd onto a constant `1.0`,
/// giving `-1.0` or `+1.0` per lane, never zero.
#[inline(always)]
pub fn sgn_vec4f(mut v: Vec4<f32>) -> Vec4<f32> {
    unsafe {
        let sign_bit_mask = _mm_set1_ps(-0.0);
        let float_one = _mm_set1_ps(1.0);
        let reg = _mm_load_ps(v.as_ptr());
        let reg = _mm_or_ps(float_one, _mm_and_ps(sign_bit_mask, reg));
        _mm_store_ps(v.as_mut_ptr(), reg);
    }
    v
}

/// Absolute value of each component, wrapping at `i32::MIN` exactly like the
/// packed instruction does.
#[inline(always)]
pub fn abs_vec4i(mut v: Vec4<i32>) -> Vec4<i32> {
    unsafe {
        let reg = _mm_load_si128(v.as_ptr() as *const __m128i);

        #[cfg(target_feature = "ssse3")]
        let out = _mm_abs_epi32(reg);

        // SSE2 form: xor with the arithmetic-shift sign fill, then subtract
        // it. Identical bits for every input, i32::MIN included.
        #[cfg(not(target_feature = "ssse3"))]
        let out = {
            let sign_fill = _mm_srai_epi32::<31>(reg);
            _mm_sub_epi32(_mm_xor_si128(reg, sign_fill), sign_fill)
        };

        _mm_store_si128(v.as_mut_ptr() as *mut __m128i, out);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar;

    #[test]
    fn matches_scalar_reference() {
        let v = Vec4::new(-1.5f32, 0.0, -0.0, 42.0);
        assert_eq!(abs_vec4f(v), scalar::abs_vec4f(v));
        assert_eq!(sgn_vec4f(v), scalar::sgn_vec4f(v));

        let vi = Vec4::new(-3i32, 0, i32::MIN, i32::MAX);
        assert_eq!(abs_vec4i(vi), scalar::abs_vec4i(vi));
    }
}
