//! Walsh-Hadamard transform as an explicit matrix-vector product.
//!
//! The `n x n` Sylvester-Hadamard matrix is grown from the 2x2 base
//! `[[1, 1], [1, -1]]` by repeated Kronecker products, then applied with
//! row-major dot products. The matrix is built fresh on every call and
//! dropped when the call returns. Output is in natural (Hadamard) order.
//!
//! Default normalization is [`Normalization::OnForward`], the opposite of
//! [`FastWalsh`](crate::fast::FastWalsh).

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::direction::{Direction, Normalization};
use crate::error::{check_len, WalshError};
use crate::num::Float;
use crate::order::WalshOrder;
use crate::WalshTransform;

/// Dense row-major matrix with `±1` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HadamardMatrix {
    size: usize,
    entries: Vec<i8>,
}

impl HadamardMatrix {
    /// The 2x2 base block `[[1, 1], [1, -1]]`.
    pub fn base() -> Self {
        Self {
            size: 2,
            entries: vec![1, 1, 1, -1],
        }
    }

    /// The `2^bits x 2^bits` Sylvester-Hadamard matrix.
    ///
    /// `bits == 0` gives `[[1]]` and `bits == 1` the base block; larger sizes
    /// take `bits - 1` Kronecker products of the base with itself.
    pub fn sylvester(bits: u32) -> Self {
        match bits {
            0 => Self {
                size: 1,
                entries: vec![1],
            },
            1 => Self::base(),
            _ => {
                let base = Self::base();
                let mut acc = base.kron(&base);
                #[cfg(feature = "verbose-logging")]
                log::trace!("hadamard: kron step 1 -> {}x{}", acc.size, acc.size);
                for _step in 2..bits {
                    acc = acc.kron(&base);
                    #[cfg(feature = "verbose-logging")]
                    log::trace!("hadamard: kron step {} -> {}x{}", _step, acc.size, acc.size);
                }
                acc
            }
        }
    }

    /// Kronecker product `self ⊗ other`.
    pub fn kron(&self, other: &Self) -> Self {
        let (p, q) = (self.size, other.size);
        let size = p * q;
        let mut entries = vec![0i8; size * size];
        for i in 0..p {
            for j in 0..p {
                let a = self.entries[i * p + j];
                for k in 0..q {
                    let row = (i * q + k) * size + j * q;
                    let src = &other.entries[k * q..(k + 1) * q];
                    for (dst, &b) in entries[row..row + q].iter_mut().zip(src) {
                        *dst = a * b;
                    }
                }
            }
        }
        Self { size, entries }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[i8] {
        &self.entries[row * self.size..(row + 1) * self.size]
    }

    /// Multiply by a column vector of length [`size`](Self::size).
    ///
    /// Any other length is rejected with [`WalshError::InvalidLength`].
    pub fn apply<T: Float>(&self, x: &[T]) -> Result<Vec<T>, WalshError> {
        if x.len() != self.size {
            return Err(WalshError::InvalidLength(x.len()));
        }
        Ok(self
            .entries
            .chunks_exact(self.size)
            .map(|row| {
                let mut sum = T::zero();
                for (&h, &v) in row.iter().zip(x) {
                    sum += v.signed(h);
                }
                sum
            })
            .collect())
    }
}

/// Matrix-based transform; O(n²) time and memory per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixWalsh {
    normalization: Normalization,
}

impl Default for MatrixWalsh {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixWalsh {
    /// Matrix transform with the forward pass scaled by `1/n`.
    pub const fn new() -> Self {
        Self {
            normalization: Normalization::OnForward,
        }
    }

    /// Override where the `1/n` factor is applied.
    pub const fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

impl<T: Float> WalshTransform<T> for MatrixWalsh {
    fn transform(&self, input: &[T], direction: Direction) -> Result<Vec<T>, WalshError> {
        let (n, bits) = check_len::<T>(input.len())?;
        let matrix = HadamardMatrix::sylvester(bits);
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "matrix walsh: len={} direction={:?} kron_products={}",
            input.len(),
            direction,
            bits.saturating_sub(1)
        );
        let mut out = matrix.apply(input)?;
        self.normalization.apply(direction, n, &mut out);
        Ok(out)
    }

    fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn order(&self) -> WalshOrder {
        WalshOrder::Natural
    }
}

/// Matrix Walsh-Hadamard transform with the default normalization.
pub fn matrix_wht<T: Float>(input: &[T], direction: Direction) -> Result<Vec<T>, WalshError> {
    MatrixWalsh::new().transform(input, direction)
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use alloc::format;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_roundtrip(bits in 0u32..6, ref signal in proptest::collection::vec(-1000.0f64..1000.0, 32)) {
            let n = 1usize << bits;
            let x = &signal[..n];
            let y = matrix_wht(x, Direction::Forward).unwrap();
            let z = matrix_wht(&y, Direction::Inverse).unwrap();
            for (a, b) in x.iter().zip(z.iter()) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }
    }
}
