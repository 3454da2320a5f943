//! Demonstrates enabling verbose logging for walshkit.
use walshkit::crosscheck::cross_validate;
use walshkit::{fwht, Direction};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![1.0, 0.0, 1.0, 0.0, 2.0, -1.0, 0.5, 0.0];
    let coeffs = fwht(&signal, Direction::Forward).unwrap();
    fwht(&coeffs, Direction::Inverse).unwrap();

    cross_validate(&signal).unwrap();
}
