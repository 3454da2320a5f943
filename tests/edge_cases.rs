//! Boundary lengths and the documented reference vector.

use walshkit::{
    direct_wht, fwht, matrix_wht, Direction, DirectWalsh, FastWalsh, MatrixWalsh, WalshError,
    WalshTransform,
};

type TransformFn = fn(&[f64], Direction) -> Result<Vec<f64>, WalshError>;

const METHODS: [(&str, TransformFn); 3] = [
    ("fast", fwht::<f64>),
    ("matrix", matrix_wht::<f64>),
    ("direct", direct_wht::<f64>),
];

/// A single sample passes through unchanged in both directions.
#[test]
fn single_sample_is_identity() {
    for (name, f) in METHODS {
        for direction in [Direction::Forward, Direction::Inverse] {
            assert_eq!(f(&[-2.75], direction).unwrap(), vec![-2.75], "{name}");
        }
    }
}

/// Non-power-of-two lengths are rejected, never truncated or padded.
#[test]
fn non_power_of_two_rejected() {
    for (name, f) in METHODS {
        for len in [3usize, 5, 6, 7, 12, 100] {
            let x = vec![1.0; len];
            for direction in [Direction::Forward, Direction::Inverse] {
                assert_eq!(
                    f(&x, direction),
                    Err(WalshError::InvalidLength(len)),
                    "{name} len={len}"
                );
            }
        }
    }
}

#[test]
fn empty_rejected() {
    for (name, f) in METHODS {
        assert_eq!(
            f(&[], Direction::Forward),
            Err(WalshError::InvalidLength(0)),
            "{name}"
        );
    }
}

/// `[1, 0, 1, 0]`: the fast transform yields the multiset {2, 2, 0, 0} in
/// frequency order and inverts back exactly.
#[test]
fn reference_vector() {
    let x = [1.0, 0.0, 1.0, 0.0];
    let y = fwht(&x, Direction::Forward).unwrap();
    let mut sorted = y.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(sorted, vec![2.0, 2.0, 0.0, 0.0]);
    assert_eq!(y, vec![2.0, 0.0, 2.0, 0.0]);
    assert_eq!(fwht(&y, Direction::Inverse).unwrap(), x.to_vec());
}

/// Documented normalization asymmetry between fast and matrix transforms.
#[test]
fn normalization_conventions_are_opposite() {
    let x = [3.0, 1.0, -2.0, 4.0, 0.0, 0.0, 1.0, 1.0];
    let n = x.len() as f64;
    let fast = FastWalsh::new().forward(&x).unwrap();
    let matrix = MatrixWalsh::new().forward(&x).unwrap();
    // DC coefficient is the plain sum for fast, the mean for matrix.
    assert_eq!(fast[0], x.iter().sum::<f64>());
    assert_eq!(matrix[0], x.iter().sum::<f64>() / n);
    let direct = DirectWalsh::new().forward(&x).unwrap();
    assert!((direct[0] - matrix[0]).abs() < 1e-12);
}

/// Error values render a readable message and work with `?` into boxed errors.
#[test]
fn error_is_std_error() {
    fn run() -> Result<Vec<f64>, Box<dyn std::error::Error>> {
        Ok(fwht(&[1.0, 2.0, 3.0], Direction::Forward)?)
    }
    let err = run().unwrap_err();
    assert_eq!(
        err.to_string(),
        "sequence length 3 is not a non-zero power of two"
    );
}
