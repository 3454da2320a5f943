//! Minimal floating-point abstraction shared by every transform.
//! no_std compatible: trigonometry goes through `libm`.

use core::f32::consts::PI as PI32;
use core::f64::consts::PI as PI64;

/// Scalar type accepted by the Walsh transforms.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + core::ops::AddAssign
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn sin(self) -> Self;
    fn abs(self) -> Self;
    fn pi() -> Self;

    /// Multiply by `±1` without a float multiply.
    #[inline(always)]
    fn signed(self, sign: i8) -> Self {
        if sign < 0 {
            -self
        } else {
            self
        }
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x <= MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn pi() -> Self {
        PI32
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: u64 = 1u64 << 53;
        if (x as u64) <= MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn pi() -> Self {
        PI64
    }
}
