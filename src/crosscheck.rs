//! Cross-validation of the three transforms against each other.
//!
//! Raw outputs differ in scale (normalization policy) and index order, so
//! [`cross_validate`] first brings every forward result to the same footing:
//! unscaled, natural Hadamard order.

extern crate alloc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::direct::DirectWalsh;
use crate::direction::Direction;
use crate::error::{check_len, WalshError};
use crate::fast::FastWalsh;
use crate::matrix::MatrixWalsh;
use crate::num::Float;
use crate::order::{reorder, WalshOrder};
use crate::WalshTransform;

/// Largest element-wise absolute difference, or `None` if the lengths differ.
pub fn max_abs_diff<T: Float>(a: &[T], b: &[T]) -> Option<T> {
    if a.len() != b.len() {
        return None;
    }
    let mut worst = T::zero();
    for (&x, &y) in a.iter().zip(b) {
        let d = (x - y).abs();
        if d > worst {
            worst = d;
        }
    }
    Some(worst)
}

/// [`max_abs_diff`] after sorting both sequences, i.e. comparison up to
/// permutation.
pub fn sorted_max_abs_diff<T: Float>(a: &[T], b: &[T]) -> Option<T> {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    let cmp = |x: &T, y: &T| x.partial_cmp(y).unwrap_or(Ordering::Equal);
    a.sort_by(cmp);
    b.sort_by(cmp);
    max_abs_diff(&a, &b)
}

/// Forward then inverse through `transform`, returning the worst deviation
/// from `input`.
pub fn roundtrip_error<T, W>(transform: &W, input: &[T]) -> Result<T, WalshError>
where
    T: Float,
    W: WalshTransform<T> + ?Sized,
{
    let direction = Direction::Forward;
    let coeffs = transform.transform(input, direction)?;
    let back = transform.transform(&coeffs, direction.reverse())?;
    max_abs_diff(input, &back).ok_or(WalshError::InvalidLength(back.len()))
}

/// Forward output of `transform` rescaled to the raw sum and permuted into
/// natural order.
pub fn canonical_forward<T, W>(transform: &W, input: &[T]) -> Result<Vec<T>, WalshError>
where
    T: Float,
    W: WalshTransform<T> + ?Sized,
{
    let coeffs = transform.forward(input)?;
    canonicalize(transform, coeffs)
}

/// Bring forward coefficients already produced by `transform` to the raw sum
/// in natural order.
pub fn canonicalize<T, W>(transform: &W, mut coeffs: Vec<T>) -> Result<Vec<T>, WalshError>
where
    T: Float,
    W: WalshTransform<T> + ?Sized,
{
    let (n, _) = check_len::<T>(coeffs.len())?;
    if transform.normalization().scales(Direction::Forward) {
        for v in coeffs.iter_mut() {
            *v = *v * n;
        }
    }
    reorder(&coeffs, transform.order(), WalshOrder::Natural)
}

/// Worst-case deviations found by [`cross_validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossCheckReport<T> {
    pub fast_roundtrip: T,
    pub matrix_roundtrip: T,
    pub direct_roundtrip: T,
    /// Fast vs. matrix after reconciling scale and order.
    pub fast_vs_matrix: T,
    /// Direct vs. matrix after reconciling scale and order.
    pub direct_vs_matrix: T,
    /// Direct vs. fast compared as sorted multisets of rescaled values.
    pub direct_vs_fast_sorted: T,
}

impl<T: Float> CrossCheckReport<T> {
    /// Largest deviation in the report.
    pub fn max_error(&self) -> T {
        [
            self.fast_roundtrip,
            self.matrix_roundtrip,
            self.direct_roundtrip,
            self.fast_vs_matrix,
            self.direct_vs_matrix,
            self.direct_vs_fast_sorted,
        ]
        .into_iter()
        .fold(T::zero(), |acc, v| if v > acc { v } else { acc })
    }

    /// Whether every deviation is within `tolerance`.
    pub fn passes(&self, tolerance: T) -> bool {
        self.max_error() <= tolerance
    }
}

/// Run all three default-configured transforms on `input` and compare them.
pub fn cross_validate<T: Float>(input: &[T]) -> Result<CrossCheckReport<T>, WalshError> {
    let fast = FastWalsh::new();
    let matrix = MatrixWalsh::new();
    let direct = DirectWalsh::new();

    let fast_nat = canonical_forward(&fast, input)?;
    let matrix_nat = canonical_forward(&matrix, input)?;
    let direct_nat = canonical_forward(&direct, input)?;
    let mismatch = WalshError::InvalidLength(input.len());

    #[cfg(feature = "verbose-logging")]
    log::debug!("cross-validating {} points", input.len());

    Ok(CrossCheckReport {
        fast_roundtrip: roundtrip_error(&fast, input)?,
        matrix_roundtrip: roundtrip_error(&matrix, input)?,
        direct_roundtrip: roundtrip_error(&direct, input)?,
        fast_vs_matrix: max_abs_diff(&fast_nat, &matrix_nat).ok_or(mismatch)?,
        direct_vs_matrix: max_abs_diff(&direct_nat, &matrix_nat).ok_or(mismatch)?,
        direct_vs_fast_sorted: sorted_max_abs_diff(&direct_nat, &fast_nat).ok_or(mismatch)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn max_abs_diff_basic() {
        assert_eq!(max_abs_diff(&[1.0f64, 2.0], &[1.5, 1.0]), Some(1.0));
        assert_eq!(max_abs_diff(&[1.0f64], &[1.0, 2.0]), None);
        let empty: [f64; 0] = [];
        assert_eq!(max_abs_diff(&empty, &empty), Some(0.0));
    }

    #[test]
    fn sorted_diff_ignores_permutation() {
        assert_eq!(
            sorted_max_abs_diff(&[3.0f64, 1.0, 2.0], &[1.0, 2.0, 3.0]),
            Some(0.0)
        );
    }

    #[test]
    fn canonical_forms_agree_on_known_vector() {
        let x = [1.0f64, 0.0, 1.0, 0.0];
        let expected = vec![2.0, 2.0, 0.0, 0.0];
        assert_eq!(canonical_forward(&FastWalsh::new(), &x).unwrap(), expected);
        assert_eq!(canonical_forward(&MatrixWalsh::new(), &x).unwrap(), expected);
        assert_eq!(canonical_forward(&DirectWalsh::new(), &x).unwrap(), expected);
    }

    #[test]
    fn canonicalize_matches_canonical_forward() {
        let x = [3.0f64, -1.0, 0.5, 2.0];
        let direct = DirectWalsh::new();
        let coeffs = direct.forward(&x).unwrap();
        assert_eq!(
            canonicalize(&direct, coeffs).unwrap(),
            canonical_forward(&direct, &x).unwrap()
        );
        assert_eq!(
            canonicalize(&direct, vec![1.0f64; 3]),
            Err(WalshError::InvalidLength(3))
        );
    }

    #[test]
    fn roundtrip_error_follows_each_normalization() {
        let x = [1.0f64, -2.0, 0.25, 8.0];
        let swapped = FastWalsh::new().with_normalization(crate::Normalization::OnForward);
        assert_eq!(roundtrip_error(&swapped, &x), Ok(0.0));
        assert_eq!(roundtrip_error(&MatrixWalsh::new(), &x), Ok(0.0));
    }

    #[test]
    fn report_on_smooth_signal() {
        let x: Vec<f64> = (0..16)
            .map(|i| {
                let a = i as f64 * core::f64::consts::PI / 6.0;
                libm::sin(3.0 * a) + libm::cos(a)
            })
            .collect();
        let report = cross_validate(&x).unwrap();
        assert!(report.passes(1e-9), "{report:?}");
    }

    #[test]
    fn report_propagates_invalid_length() {
        assert_eq!(
            cross_validate(&[1.0f64; 5]),
            Err(WalshError::InvalidLength(5))
        );
    }

    #[test]
    fn max_error_picks_worst() {
        let report = CrossCheckReport {
            fast_roundtrip: 0.1f64,
            matrix_roundtrip: 0.0,
            direct_roundtrip: 0.3,
            fast_vs_matrix: 0.2,
            direct_vs_matrix: 0.0,
            direct_vs_fast_sorted: 0.0,
        };
        assert_eq!(report.max_error(), 0.3);
        assert!(!report.passes(0.25));
    }
}
