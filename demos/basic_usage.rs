//! Basic usage example for walshkit
//!
//! Runs the three Walsh-Hadamard transforms on the same signal, inverts
//! each one and shows how their outputs line up once scale and order are
//! reconciled.

use walshkit::crosscheck::cross_validate;
use walshkit::order::{frequency_to_natural, reorder};
use walshkit::{DirectWalsh, FastWalsh, MatrixWalsh, WalshOrder, WalshTransform};

fn main() {
    println!("=== walshkit Basic Usage Example ===\n");

    let n = 16;
    let signal: Vec<f64> = (0..n)
        .map(|i| {
            let x = i as f64 * std::f64::consts::PI / 6.0;
            (3.0 * x).sin() + x.cos()
        })
        .collect();
    println!("Input: {:?}\n", fmt(&signal));

    // 1. Fast transform: raw forward output, frequency order
    println!("1. Fast Walsh transform (recursive)");
    let fast = FastWalsh::new();
    let fast_fwd = fast.forward(&signal).unwrap();
    println!("   Forward: {:?}", fmt(&fast_fwd));
    println!("   Inverse: {:?}\n", fmt(&fast.inverse(&fast_fwd).unwrap()));

    // 2. Matrix transform: forward divided by n, natural order
    println!("2. Matrix Walsh transform (Kronecker)");
    let matrix = MatrixWalsh::new();
    let matrix_fwd = matrix.forward(&signal).unwrap();
    println!("   Forward: {:?}", fmt(&matrix_fwd));
    println!("   Inverse: {:?}\n", fmt(&matrix.inverse(&matrix_fwd).unwrap()));

    // 3. Direct transform: forward divided by n, sequency order
    println!("3. Direct Walsh transform (Rademacher basis)");
    let direct = DirectWalsh::new();
    let direct_fwd = direct.forward(&signal).unwrap();
    println!("   Forward: {:?}", fmt(&direct_fwd));
    println!("   Inverse: {:?}\n", fmt(&direct.inverse(&direct_fwd).unwrap()));

    // 4. Same coefficients once reconciled
    println!("4. Natural order, unscaled");
    let fast_nat = frequency_to_natural(&fast_fwd).unwrap();
    let direct_nat: Vec<f64> = reorder(&direct_fwd, WalshOrder::Sequency, WalshOrder::Natural)
        .unwrap()
        .iter()
        .map(|v| v * n as f64)
        .collect();
    println!("   Fast:   {:?}", fmt(&fast_nat));
    println!("   Direct: {:?}", fmt(&direct_nat));

    let report = cross_validate(&signal).unwrap();
    println!("\nWorst deviation across all checks: {:.3e}", report.max_error());
}

fn fmt(values: &[f64]) -> Vec<String> {
    values.iter().map(|v| format!("{:.3}", v)).collect()
}
