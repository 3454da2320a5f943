//! Transform direction and the normalization policies built on it.
//!
//! The three transforms do not agree on where the `1/n` factor goes.
//! [`FastWalsh`](crate::fast::FastWalsh) scales on the inverse pass while
//! [`MatrixWalsh`](crate::matrix::MatrixWalsh) and
//! [`DirectWalsh`](crate::direct::DirectWalsh) scale on the forward pass.
//! Both conventions round-trip; raw forward outputs differ by a factor of `n`.

use crate::num::Float;

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// Direction on which every output element is divided by the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// Divide by `n` on [`Direction::Forward`]; inverse output is raw.
    OnForward,
    /// Divide by `n` on [`Direction::Inverse`]; forward output is raw.
    OnInverse,
}

impl Normalization {
    /// Whether `direction` is the scaled pass under this policy.
    pub fn scales(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Normalization::OnForward, Direction::Forward)
                | (Normalization::OnInverse, Direction::Inverse)
        )
    }

    /// Divide `out` by `n` in place if `direction` is the scaled pass.
    pub(crate) fn apply<T: Float>(self, direction: Direction, n: T, out: &mut [T]) {
        if self.scales(direction) {
            for v in out.iter_mut() {
                *v = *v / n;
            }
        }
    }
}
