//! Fast Walsh-Hadamard transform by recursive sum/difference splitting.
//!
//! Each level pairs `x[i]` with `x[i + n/2]`, transforms the sums and the
//! differences independently and interleaves the two results. The output is
//! in *frequency* order, which is the natural (Sylvester) Hadamard order with
//! bit-reversed indices; see [`crate::order::frequency_to_natural`].
//!
//! Default normalization is [`Normalization::OnInverse`]: forward output is
//! raw, inverse output is divided by `n` once after the top-level recursion.

extern crate alloc;
use alloc::vec::Vec;

use crate::direction::{Direction, Normalization};
use crate::error::{check_len, WalshError};
use crate::num::Float;
use crate::order::WalshOrder;
use crate::WalshTransform;

/// Recursive O(n log n) transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastWalsh {
    normalization: Normalization,
}

impl Default for FastWalsh {
    fn default() -> Self {
        Self::new()
    }
}

impl FastWalsh {
    /// Fast transform with the inverse pass scaled by `1/n`.
    pub const fn new() -> Self {
        Self {
            normalization: Normalization::OnInverse,
        }
    }

    /// Override where the `1/n` factor is applied.
    pub const fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

impl<T: Float> WalshTransform<T> for FastWalsh {
    fn transform(&self, input: &[T], direction: Direction) -> Result<Vec<T>, WalshError> {
        let (n, _bits) = check_len::<T>(input.len())?;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "fast walsh: len={} direction={:?} levels={}",
            input.len(),
            direction,
            _bits
        );
        let mut out = frequency_ordered(input);
        self.normalization.apply(direction, n, &mut out);
        Ok(out)
    }

    fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn order(&self) -> WalshOrder {
        WalshOrder::Frequency
    }
}

/// Unscaled recursion. `input.len()` must be a power of two.
fn frequency_ordered<T: Float>(input: &[T]) -> Vec<T> {
    let n = input.len();
    if n == 1 {
        return input.to_vec();
    }
    let half = n / 2;
    let (lo, hi) = input.split_at(half);
    let mut sums = Vec::with_capacity(half);
    let mut diffs = Vec::with_capacity(half);
    for (&a, &b) in lo.iter().zip(hi) {
        sums.push(a + b);
        diffs.push(a - b);
    }
    let sums = frequency_ordered(&sums);
    let diffs = frequency_ordered(&diffs);
    let mut out = Vec::with_capacity(n);
    for (s, d) in sums.into_iter().zip(diffs) {
        out.push(s);
        out.push(d);
    }
    out
}

/// Fast Walsh-Hadamard transform with the default normalization.
pub fn fwht<T: Float>(input: &[T], direction: Direction) -> Result<Vec<T>, WalshError> {
    FastWalsh::new().transform(input, direction)
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use alloc::format;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_roundtrip(bits in 0u32..7, ref signal in proptest::collection::vec(-1000.0f64..1000.0, 64)) {
            let n = 1usize << bits;
            let x = &signal[..n];
            let y = fwht(x, Direction::Forward).unwrap();
            let z = fwht(&y, Direction::Inverse).unwrap();
            for (a, b) in x.iter().zip(z.iter()) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_parseval(bits in 0u32..7, ref signal in proptest::collection::vec(-100.0f64..100.0, 64)) {
            let n = 1usize << bits;
            let x = &signal[..n];
            let y = fwht(x, Direction::Forward).unwrap();
            let ex: f64 = x.iter().map(|v| v * v).sum();
            let ey: f64 = y.iter().map(|v| v * v).sum();
            prop_assert!((ex * n as f64 - ey).abs() <= 1e-6 * ey.max(1.0));
        }
    }
}
