//! # walshkit - Walsh-Hadamard transforms, three ways
//!
//! Computes the Walsh-Hadamard transform (WHT) of a real sequence and its
//! inverse with three independent algorithms so they can be checked against
//! each other:
//!
//! | Transform | Strategy | Cost | Output order | Scaled pass |
//! |-----------|----------|------|--------------|-------------|
//! | [`FastWalsh`] | recursive sum/difference split | O(n log n) | frequency | inverse |
//! | [`MatrixWalsh`] | Kronecker-built Hadamard matrix | O(n²) | natural | forward |
//! | [`DirectWalsh`] | Rademacher-product basis, direct sum | O(n² log n) | sequency | forward |
//!
//! The scaled pass differs between [`FastWalsh`] and the other two. Each
//! transform keeps its own [`Normalization`] and can be reconfigured with
//! `with_normalization`. The [`order`] module maps between output orderings
//! and [`crosscheck`] compares all three on one input.
//!
//! Every entry point requires a non-zero power-of-two length and returns
//! [`WalshError::InvalidLength`] otherwise. Inputs are never mutated.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`WalshError`]
//! - `parallel`: rayon-backed [`DirectWalsh`] above a length threshold
//!   (`WALSHKIT_PAR_DIRECT_THRESHOLD`)
//! - `verbose-logging`: `log` records from every transform
//! - `internal-tests`: proptest suites inside the crate
//!
//! ## Example
//!
//! ```
//! use walshkit::{fwht, Direction};
//!
//! let coeffs = fwht(&[1.0f64, 0.0, 1.0, 0.0], Direction::Forward).unwrap();
//! assert_eq!(coeffs, vec![2.0, 0.0, 2.0, 0.0]);
//! let back = fwht(&coeffs, Direction::Inverse).unwrap();
//! assert_eq!(back, vec![1.0, 0.0, 1.0, 0.0]);
//! ```

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;

/// Rademacher functions, bit extraction and Walsh basis synthesis.
pub mod basis;
/// Cross-validation helpers comparing the three transforms.
pub mod crosscheck;
/// Direct O(n²) transform over sampled Walsh functions.
pub mod direct;
pub mod direction;
pub mod error;
/// Recursive fast transform.
pub mod fast;
/// Kronecker-product matrix transform.
pub mod matrix;
pub mod num;
/// Conversions between natural, frequency and sequency orderings.
pub mod order;

pub use direct::{direct_wht, DirectWalsh};
pub use direction::{Direction, Normalization};
pub use error::WalshError;
pub use fast::{fwht, FastWalsh};
pub use matrix::{matrix_wht, HadamardMatrix, MatrixWalsh};
pub use num::Float;
pub use order::WalshOrder;

/// A Walsh-Hadamard transform over real sequences of scalar `T`.
pub trait WalshTransform<T: Float> {
    /// Transform `input` in `direction`, returning a new sequence of the same
    /// length.
    fn transform(&self, input: &[T], direction: Direction) -> Result<Vec<T>, WalshError>;

    /// Direction on which this transform divides by the length.
    fn normalization(&self) -> Normalization;

    /// Ordering of forward output coefficients.
    fn order(&self) -> WalshOrder;

    fn forward(&self, input: &[T]) -> Result<Vec<T>, WalshError> {
        self.transform(input, Direction::Forward)
    }

    fn inverse(&self, input: &[T]) -> Result<Vec<T>, WalshError> {
        self.transform(input, Direction::Inverse)
    }

    /// Transform each sequence independently; stops at the first error.
    fn batch(&self, inputs: &[Vec<T>], direction: Direction) -> Result<Vec<Vec<T>>, WalshError> {
        inputs
            .iter()
            .map(|input| self.transform(input, direction))
            .collect()
    }

    /// Transform each channel in place. Channels before a failing one are
    /// already transformed when the error is returned.
    fn multi_channel(&self, channels: &mut [Vec<T>], direction: Direction) -> Result<(), WalshError> {
        for channel in channels.iter_mut() {
            let out = self.transform(channel, direction)?;
            channel.copy_from_slice(&out);
        }
        Ok(())
    }
}
