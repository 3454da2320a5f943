//! Error type shared by all Walsh transforms.

use core::fmt;

use crate::num::Float;

/// Errors that can occur when running a Walsh transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalshError {
    /// The input length is zero, not a power of two, or too large to be
    /// represented exactly by the scalar type.
    InvalidLength(usize),
    /// A fixed direct-transform sample offset outside `(0, 1/len)`.
    InvalidTimeOffset { offset: f64, len: usize },
}

impl fmt::Display for WalshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalshError::InvalidLength(len) => {
                write!(f, "sequence length {} is not a non-zero power of two", len)
            }
            WalshError::InvalidTimeOffset { offset, len } => write!(
                f,
                "time offset {} is outside the first sample interval (0, 1/{})",
                offset, len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WalshError {}

/// Validate a sequence length and return `(n as T, log2(n))`.
///
/// Every transform calls this before touching the data.
pub(crate) fn check_len<T: Float>(len: usize) -> Result<(T, u32), WalshError> {
    let bits = log2_len(len)?;
    let n = T::from_usize(len).ok_or(WalshError::InvalidLength(len))?;
    Ok((n, bits))
}

/// `log2(len)` for a non-zero power of two.
pub(crate) fn log2_len(len: usize) -> Result<u32, WalshError> {
    if len == 0 || !len.is_power_of_two() {
        return Err(WalshError::InvalidLength(len));
    }
    Ok(len.trailing_zeros())
}
