//! Quaternions.
//!
//! [`Quat`] reinterprets a 4-wide float vector `[x, y, z, w]` as
//! `i*x + j*y + k*z + w`: imaginary part `v = (x, y, z)`, real part `w`,
//! with `i² = j² = k² = -1`, `j*k = -k*j = i`, `k*i = -i*k = j`,
//! `i*j = -j*i = k`. Rotation use requires unit length; the type never
//! enforces or restores that invariant itself.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::support::approx_equal;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// A quaternion. Field order matches the underlying 4-wide vector:
/// `x`, `y`, `z` are the imaginary part, `w` the scalar real part.
///
/// Exactly 16 bytes, 16-byte aligned, no padding; a pointer to `x` is a
/// pointer to four packed floats.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    /// Imaginary `i` component.
    pub x: f32,
    /// Imaginary `j` component.
    pub y: f32,
    /// Imaginary `k` component.
    pub z: f32,
    /// Scalar real part.
    pub w: f32,
}

const _: () = assert!(core::mem::size_of::<Quat>() == 16);
const _: () = assert!(core::mem::align_of::<Quat>() == 16);

impl Quat {
    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from an imaginary part and a scalar real part.
    #[inline]
    pub const fn from_parts(v: Vec3<f32>, w: f32) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    /// The identity quaternion `(0, 0, 0, 1)`, representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub const fn v(self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The components as a 4-wide vector, same order, same storage layout.
    #[inline]
    pub const fn vector(self) -> Vec4<f32> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Builds a quaternion from its 4-wide vector form.
    #[inline]
    pub const fn from_vector(v: Vec4<f32>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Pointer to the first component of the tightly packed storage.
    #[inline]
    pub const fn as_ptr(&self) -> *const f32 {
        &self.x
    }

    /// Mutable pointer to the first component.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut f32 {
        &mut self.x
    }

    /// The norm of the quaternion. Unit quaternions (length 1) are the ones
    /// that represent rotations.
    #[inline]
    pub fn length(self) -> f32 {
        self.vector().length()
    }

    /// The conjugate `(-x, -y, -z, w)`.
    ///
    /// Equal to the inverse only when `length(q) == 1`; for a non-unit
    /// quaternion the result is a well-defined value that is simply not the
    /// inverse. Callers working with rotations should prefer this over
    /// [`Quat::inverse`] since their quaternions should already be unit.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// The inverse, `conjugate(q) / length(q)²`, valid for any quaternion of
    /// nonzero length. Costs a division more than [`Quat::conjugate`].
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.vector().squared_length())
    }

    /// Tolerance-based equality, per component.
    #[inline]
    pub fn approx_eq(self, rhs: Self, epsilon: f32) -> bool {
        approx_equal(self.x, rhs.x, epsilon)
            && approx_equal(self.y, rhs.y, epsilon)
            && approx_equal(self.z, rhs.z, epsilon)
            && approx_equal(self.w, rhs.w, epsilon)
    }
}

impl AddAssign for Quat {
    /// Component-wise sum on the underlying 4-wide vector. This is linear
    /// combination (the building block of interpolation), not rotation
    /// composition.
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::from_vector(self.vector() + rhs.vector());
    }
}

impl SubAssign for Quat {
    /// Component-wise difference on the underlying 4-wide vector.
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::from_vector(self.vector() - rhs.vector());
    }
}

impl MulAssign for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = Self::from_vector(self.vector() * rhs);
    }
}

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul for Quat {
    type Output = Self;

    /// The Hamilton product, composing the right rotation with the left.
    /// Non-commutative.
    ///
    /// ```rust
    /// use lumen_math::Quat;
    ///
    /// let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(Quat::identity() * q, q);
    /// assert_eq!(q * Quat::identity(), q);
    /// ```
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let v = self.v().cross(rhs.v()) + rhs.v() * self.w + self.v() * rhs.w;
        let w = self.w * rhs.w - self.v().dot(rhs.v());
        Self::from_parts(v, w)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    /// Uniform scale of all four components.
    #[inline]
    fn mul(mut self, rhs: f32) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    /// Uniform scale of all four components.
    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}
