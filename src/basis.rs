//! Walsh basis functions synthesized from Rademacher square waves.
//!
//! `wal(order, t)` on `[0, 1)` is the product of the Rademacher functions
//! selected by the Gray code of `order`, which yields the sequency-ordered
//! Walsh system. These are the building blocks of
//! [`DirectWalsh`](crate::direct::DirectWalsh).

use crate::error::{log2_len, WalshError};
use crate::num::Float;

/// Read bit `position` (LSB = 0) of `value`.
///
/// Returns `0` for `value == 0`, for an unset bit, and for any position at or
/// beyond the width of `usize`.
#[inline]
pub fn bit(value: usize, position: u32) -> u8 {
    if value == 0 || position >= usize::BITS {
        return 0;
    }
    ((value >> position) & 1) as u8
}

/// Rademacher function `r_k(t) = sign(sin(2^k * pi * t))`.
///
/// Returns `+1` when the sine is strictly positive and `-1` otherwise, so an
/// exact zero crossing maps to `-1`.
#[inline]
pub fn rademacher<T: Float>(t: T, k: u32) -> i8 {
    let mut freq = T::one();
    for _ in 0..k {
        freq = freq + freq;
    }
    if (freq * T::pi() * t).sin() > T::zero() {
        1
    } else {
        -1
    }
}

/// Walsh function of the given `order` at time `t` for a basis of `length`
/// points.
///
/// `length` must be a non-zero power of two.
pub fn walsh<T: Float>(order: usize, t: T, length: usize) -> Result<i8, WalshError> {
    let bits = log2_len(length)?;
    Ok(walsh_bits(order, t, bits))
}

/// [`walsh`] with `log2(length)` already known.
#[inline]
pub(crate) fn walsh_bits<T: Float>(order: usize, t: T, bits: u32) -> i8 {
    let mut value = 1i8;
    for k in 1..=bits {
        // r_k^(b_{k-1} xor b_k); exponent 0 contributes a factor of 1.
        if bit(order, k - 1) ^ bit(order, k) == 1 {
            value *= rademacher(t, k);
        }
    }
    value
}
