//! Element-type abstractions shared by every vector type.
//!
//! [`Scalar`] is the bound every vector element satisfies: plain-value
//! arithmetic with ordering, covering the floating-point and signed-integer
//! primitives. [`Real`] adds the square root needed by the norm-bearing
//! operations, routed through `libm` so the crate stays `no_std`.

use core::ops::Neg;
use num_traits::{Num, NumAssignOps};

/// Vector element type: a copyable numeric scalar with full arithmetic,
/// assignment operators, negation, and partial ordering.
///
/// Implemented for `f32`, `f64`, `i32`, and `i64` through the blanket impl.
/// Unsigned integers are excluded on purpose: the operation set includes
/// negation and sign queries.
pub trait Scalar:
    Copy + PartialOrd + Num + NumAssignOps + Neg<Output = Self> + 'static
{
}

impl<T> Scalar for T where
    T: Copy + PartialOrd + Num + NumAssignOps + Neg<Output = T> + 'static
{
}

/// Floating-point scalar: a [`Scalar`] with a square root.
///
/// Only `Real` vectors have `length`, `normalize`, and `safe_normalize`;
/// integer vectors stop at `squared_length`.
pub trait Real: Scalar {
    /// Returns the square root of `self`.
    fn sqrt(self) -> Self;
}

impl Real for f32 {
    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
}

impl Real for f64 {
    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}
