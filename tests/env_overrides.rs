// Test intent: verifies the parallel threshold env override.
#![cfg(feature = "parallel")]

use std::process::Command;

#[test]
fn print_threshold() {
    println!("{}", walshkit::direct::parallel_direct_threshold());
}

fn threshold_with_env(value: &str) -> usize {
    let exe = std::env::current_exe().unwrap();
    let output = Command::new(&exe)
        .env("WALSHKIT_PAR_DIRECT_THRESHOLD", value)
        .args(["--exact", "print_threshold", "--nocapture"])
        .output()
        .expect("run threshold test");
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .rev()
        .find_map(|l| l.trim().parse().ok())
        .unwrap()
}

#[test]
fn env_sets_threshold() {
    assert_eq!(threshold_with_env("32"), 32);
    assert_eq!(threshold_with_env("64"), 64);
}

#[test]
fn invalid_env_value_falls_back_to_default() {
    assert_eq!(
        threshold_with_env("not-a-number"),
        walshkit::direct::DEFAULT_PARALLEL_DIRECT_THRESHOLD
    );
    assert_eq!(
        threshold_with_env("0"),
        walshkit::direct::DEFAULT_PARALLEL_DIRECT_THRESHOLD
    );
}
