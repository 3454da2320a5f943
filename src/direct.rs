//! Direct O(n²) Walsh transform from sampled Walsh basis functions.
//!
//! Forward:  `X[m] = (1/n) * sum_i x[i] * wal(m, i/n + offset)`
//! Inverse:  `x[m] = sum_i X[i] * wal(i, m/n + offset)`
//!
//! The inverse swaps which index is the basis order and which is the time
//! sample. Output is in sequency order (see
//! [`crate::order::natural_to_sequency`]). Default normalization is
//! [`Normalization::OnForward`].
//!
//! With the `parallel` feature, output indices are spread over rayon once the
//! length reaches [`parallel_direct_threshold`]. Every element is accumulated
//! in the same order either way, so results are identical.

extern crate alloc;
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

use crate::basis::walsh_bits;
use crate::direction::{Direction, Normalization};
use crate::error::{check_len, WalshError};
use crate::num::Float;
use crate::order::WalshOrder;
use crate::WalshTransform;

/// Offset added to every sample time so the square waves are never read
/// exactly on a sign change.
pub const DEFAULT_TIME_OFFSET: f64 = 0.005;

/// Built-in minimum length for the parallel path.
#[cfg(feature = "parallel")]
pub const DEFAULT_PARALLEL_DIRECT_THRESHOLD: usize = 256;

/// `0` means no override.
#[cfg(feature = "parallel")]
static PARALLEL_DIRECT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_DIRECT_THRESHOLD_ENV: OnceLock<usize> = OnceLock::new();

#[cfg(feature = "parallel")]
/// Set the minimum length at which [`DirectWalsh`] runs in parallel.
///
/// Passing `0` reverts to `WALSHKIT_PAR_DIRECT_THRESHOLD` or the built-in
/// default.
pub fn set_parallel_direct_threshold(threshold: usize) {
    PARALLEL_DIRECT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
/// Current minimum length for parallel [`DirectWalsh`].
pub fn parallel_direct_threshold() -> usize {
    let threshold = PARALLEL_DIRECT_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if threshold != 0 {
        return threshold;
    }
    *PARALLEL_DIRECT_THRESHOLD_ENV.get_or_init(|| {
        std::env::var("WALSHKIT_PAR_DIRECT_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_DIRECT_THRESHOLD)
    })
}

/// Direct-summation transform over Rademacher-product basis functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectWalsh {
    normalization: Normalization,
    /// `None` selects [`DEFAULT_TIME_OFFSET`] with the half-interval fallback.
    time_offset: Option<f64>,
}

impl Default for DirectWalsh {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectWalsh {
    /// Direct transform with the forward pass scaled by `1/n` and the
    /// default sample offset.
    pub const fn new() -> Self {
        Self {
            normalization: Normalization::OnForward,
            time_offset: None,
        }
    }

    /// Override where the `1/n` factor is applied.
    pub const fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Use a fixed sample time offset.
    ///
    /// The offset is used as given. A transform of `n` points fails with
    /// [`WalshError::InvalidTimeOffset`] unless it lies strictly inside the
    /// first sample interval `(0, 1/n)`.
    pub const fn with_time_offset(mut self, time_offset: f64) -> Self {
        self.time_offset = Some(time_offset);
        self
    }

    /// Configured sample time offset; [`DEFAULT_TIME_OFFSET`] unless set.
    pub fn time_offset(&self) -> f64 {
        self.time_offset.unwrap_or(DEFAULT_TIME_OFFSET)
    }

    /// Offset actually used for a transform of `len` points.
    ///
    /// The default is [`DEFAULT_TIME_OFFSET`] while it fits inside `(0, 1/len)`
    /// and half an interval, `0.5/len`, from `len = 256` on. An explicit
    /// offset outside `(0, 1/len)` is an error.
    pub fn effective_time_offset(&self, len: usize) -> Result<f64, WalshError> {
        let n = len.max(1) as f64;
        let inside = |offset: f64| offset > 0.0 && offset * n < 1.0;
        match self.time_offset {
            None if inside(DEFAULT_TIME_OFFSET) => Ok(DEFAULT_TIME_OFFSET),
            None => Ok(0.5 / n),
            Some(offset) if inside(offset) => Ok(offset),
            Some(offset) => Err(WalshError::InvalidTimeOffset { offset, len }),
        }
    }
}

impl<T: Float> WalshTransform<T> for DirectWalsh {
    fn transform(&self, input: &[T], direction: Direction) -> Result<Vec<T>, WalshError> {
        let len = input.len();
        let (n, bits) = check_len::<T>(len)?;
        let offset = self.effective_time_offset(len)?;
        #[cfg(feature = "verbose-logging")]
        {
            log::debug!(
                "direct walsh: len={} direction={:?} offset={}",
                len,
                direction,
                offset
            );
            if self.time_offset.is_none() && offset != DEFAULT_TIME_OFFSET {
                log::trace!(
                    "direct walsh: default offset {} outside (0, 1/{}), using {}",
                    DEFAULT_TIME_OFFSET,
                    len,
                    offset
                );
            }
        }
        let offset = T::from_f64(offset);
        let times = (0..len)
            .map(|i| T::from_usize(i).map(|i| i / n + offset))
            .collect::<Option<Vec<T>>>()
            .ok_or(WalshError::InvalidLength(len))?;

        let element = |m: usize| -> T {
            let mut sum = T::zero();
            match direction {
                Direction::Forward => {
                    for (&x, &t) in input.iter().zip(&times) {
                        sum += x.signed(walsh_bits(m, t, bits));
                    }
                }
                Direction::Inverse => {
                    let t = times[m];
                    for (i, &x) in input.iter().enumerate() {
                        sum += x.signed(walsh_bits(i, t, bits));
                    }
                }
            }
            sum
        };

        #[cfg(feature = "parallel")]
        let mut out: Vec<T> = if len >= parallel_direct_threshold() {
            (0..len).into_par_iter().map(element).collect()
        } else {
            (0..len).map(element).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let mut out: Vec<T> = (0..len).map(element).collect();

        self.normalization.apply(direction, n, &mut out);
        Ok(out)
    }

    fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn order(&self) -> WalshOrder {
        WalshOrder::Sequency
    }
}

/// Direct Walsh transform with the default normalization and time offset.
pub fn direct_wht<T: Float>(input: &[T], direction: Direction) -> Result<Vec<T>, WalshError> {
    DirectWalsh::new().transform(input, direction)
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
            let y = direct_wht(x, Direction::Forward).unwrap();
            let z = direct_wht(&y, Direction::Inverse).unwrap();
            for (a, b) in x.iter().zip(z.iter()) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }
    }
}
