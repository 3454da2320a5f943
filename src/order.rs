//! Index orderings of Walsh-Hadamard outputs.
//!
//! Every ordering is a permutation of the rows of the natural (Sylvester)
//! Hadamard matrix `H[r][c] = (-1)^popcount(r & c)`:
//!
//! | Ordering | Produced by | Row at position `m` |
//! |----------|-------------|---------------------|
//! | Natural  | [`MatrixWalsh`](crate::matrix::MatrixWalsh) | `m` |
//! | Frequency | [`FastWalsh`](crate::fast::FastWalsh) | `bit_reverse(m)` |
//! | Sequency | [`DirectWalsh`](crate::direct::DirectWalsh) | `bit_reverse(gray_code(m))` |

extern crate alloc;
use alloc::vec::Vec;

use crate::error::{log2_len, WalshError};

/// Output ordering of a Walsh transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalshOrder {
    Natural,
    Frequency,
    Sequency,
}

impl WalshOrder {
    /// Natural Hadamard row found at `position` in this ordering.
    pub fn natural_row(self, position: usize, bits: u32) -> usize {
        match self {
            WalshOrder::Natural => position,
            WalshOrder::Frequency => bit_reverse(position, bits),
            WalshOrder::Sequency => bit_reverse(gray_code(position), bits),
        }
    }

    /// Position of natural Hadamard row `row` in this ordering.
    pub fn position_of(self, row: usize, bits: u32) -> usize {
        match self {
            WalshOrder::Natural => row,
            WalshOrder::Frequency => bit_reverse(row, bits),
            WalshOrder::Sequency => gray_decode(bit_reverse(row, bits)),
        }
    }
}

/// Reverse the low `bits` bits of `index`.
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Binary-reflected Gray code of `index`.
pub fn gray_code(index: usize) -> usize {
    index ^ (index >> 1)
}

/// Inverse of [`gray_code`].
pub fn gray_decode(mut code: usize) -> usize {
    let mut shift = 1;
    while shift < usize::BITS {
        code ^= code >> shift;
        shift <<= 1;
    }
    code
}

/// Permute `input`, laid out in `from` order, into `to` order.
pub fn reorder<T: Copy>(input: &[T], from: WalshOrder, to: WalshOrder) -> Result<Vec<T>, WalshError> {
    let bits = log2_len(input.len())?;
    let mut out = input.to_vec();
    if from == to {
        return Ok(out);
    }
    for (m, &v) in input.iter().enumerate() {
        let row = from.natural_row(m, bits);
        out[to.position_of(row, bits)] = v;
    }
    Ok(out)
}

/// Frequency-ordered ([`FastWalsh`](crate::fast::FastWalsh)) to natural order.
pub fn frequency_to_natural<T: Copy>(input: &[T]) -> Result<Vec<T>, WalshError> {
    reorder(input, WalshOrder::Frequency, WalshOrder::Natural)
}

/// Natural-ordered ([`MatrixWalsh`](crate::matrix::MatrixWalsh)) to sequency order.
pub fn natural_to_sequency<T: Copy>(input: &[T]) -> Result<Vec<T>, WalshError> {
    reorder(input, WalshOrder::Natural, WalshOrder::Sequency)
}
