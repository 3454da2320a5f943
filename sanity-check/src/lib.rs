use clap::ValueEnum;
use hound::{SampleFormat, WavReader};
use serde::Serialize;
use std::error::Error;
use std::fmt::Write;
use std::io;
use std::path::Path;
use walshkit::crosscheck::{canonicalize, max_abs_diff, sorted_max_abs_diff};
use walshkit::{DirectWalsh, FastWalsh, MatrixWalsh, WalshError, WalshTransform};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// `sin(3x) + cos(x)` sampled at `x = i * pi / 6`.
pub fn demo_signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let x = i as f64 * std::f64::consts::PI / 6.0;
            (3.0 * x).sin() + x.cos()
        })
        .collect()
}

/// Largest power of two not above `len`, or 0 for an empty input.
pub fn power_of_two_prefix(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - len.leading_zeros())
    }
}

/// Load a WAV file as mono samples in `[-1, 1]`, truncated to the largest
/// power-of-two prefix no longer than `max_len`.
pub fn read_wav(path: &Path, max_len: usize) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;
    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample.saturating_sub(1))) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()?
        }
    };
    let mono: Vec<f64> = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect();
    let len = power_of_two_prefix(mono.len().min(max_len));
    if len == 0 {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::InvalidData,
            "no samples in wav file",
        )));
    }
    log::info!(
        "loaded {} of {} frames from {} ({} Hz, {} ch)",
        len,
        mono.len(),
        path.display(),
        spec.sample_rate,
        channels
    );
    Ok(mono[..len].to_vec())
}

/// Outputs of one transform on the checked signal.
#[derive(Debug, Clone, Serialize)]
pub struct MethodReport {
    pub name: &'static str,
    pub order: String,
    pub normalization: String,
    pub forward: Vec<f64>,
    pub inverse: Vec<f64>,
    pub roundtrip_error: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub len: usize,
    pub tolerance: f64,
    pub methods: Vec<MethodReport>,
    pub fast_vs_matrix: f64,
    pub direct_vs_matrix: f64,
    pub direct_vs_fast_sorted: f64,
    pub passed: bool,
}

/// Run all three transforms on `input` and compare them.
pub fn run_checks(input: &[f64], tolerance: f64) -> Result<Report, WalshError> {
    let fast = FastWalsh::new();
    let matrix = MatrixWalsh::new();
    let direct = DirectWalsh::new();
    let transforms: [(&'static str, &dyn WalshTransform<f64>); 3] =
        [("fast", &fast), ("matrix", &matrix), ("direct", &direct)];

    let mismatch = WalshError::InvalidLength(input.len());
    let mut methods = Vec::with_capacity(transforms.len());
    let mut natural = Vec::with_capacity(transforms.len());
    for (name, t) in transforms {
        let forward = t.forward(input)?;
        let inverse = t.inverse(&forward)?;
        let roundtrip_error = max_abs_diff(input, &inverse).ok_or(mismatch)?;
        natural.push(canonicalize(t, forward.clone())?);
        methods.push(MethodReport {
            name,
            order: format!("{:?}", t.order()),
            normalization: format!("{:?}", t.normalization()),
            forward,
            inverse,
            roundtrip_error,
        });
    }

    let fast_vs_matrix = max_abs_diff(&natural[0], &natural[1]).ok_or(mismatch)?;
    let direct_vs_matrix = max_abs_diff(&natural[2], &natural[1]).ok_or(mismatch)?;
    let direct_vs_fast_sorted = sorted_max_abs_diff(&natural[2], &natural[0]).ok_or(mismatch)?;

    let worst = methods
        .iter()
        .map(|m| m.roundtrip_error)
        .chain([fast_vs_matrix, direct_vs_matrix, direct_vs_fast_sorted])
        .fold(0.0f64, f64::max);
    Ok(Report {
        len: input.len(),
        tolerance,
        methods,
        fast_vs_matrix,
        direct_vs_matrix,
        direct_vs_fast_sorted,
        passed: worst <= tolerance,
    })
}

/// Human readable table of a [`Report`].
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "n = {}, tolerance = {:e}", report.len, report.tolerance);
    for m in &report.methods {
        let _ = writeln!(
            out,
            "{} ({} order, {}), roundtrip error {:.3e}",
            m.name, m.order, m.normalization, m.roundtrip_error
        );
        write_values(&mut out, "forward", &m.forward);
        write_values(&mut out, "inverse", &m.inverse);
    }
    let _ = writeln!(out, "fast vs matrix:        {:.3e}", report.fast_vs_matrix);
    let _ = writeln!(out, "direct vs matrix:      {:.3e}", report.direct_vs_matrix);
    let _ = writeln!(out, "direct vs fast sorted: {:.3e}", report.direct_vs_fast_sorted);
    let _ = writeln!(out, "{}", if report.passed { "PASS" } else { "FAIL" });
    out
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_signal_values() {
        let x = demo_signal(4);
        assert!((x[0] - 1.0).abs() < 1e-12);
        // x = pi/6: sin(pi/2) + cos(pi/6)
        assert!((x[1] - (1.0 + 3f64.sqrt() / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn power_of_two_prefix_rounds_down() {
        assert_eq!(power_of_two_prefix(0), 0);
        assert_eq!(power_of_two_prefix(1), 1);
        assert_eq!(power_of_two_prefix(5), 4);
        assert_eq!(power_of_two_prefix(1024), 1024);
        assert_eq!(power_of_two_prefix(1500), 1024);
    }

    #[test]
    fn demo_signal_passes() {
        let report = run_checks(&demo_signal(16), 1e-9).unwrap();
        assert!(report.passed, "{report:?}");
        assert_eq!(report.methods.len(), 3);
        assert_eq!(report.methods[0].order, "Frequency");
        assert_eq!(report.methods[1].normalization, "OnForward");
    }

    #[test]
    fn impossible_tolerance_fails() {
        let report = run_checks(&demo_signal(16), -1.0).unwrap();
        assert!(!report.passed);
        assert!(render_text(&report).ends_with("FAIL\n"));
    }

    #[test]
    fn invalid_length_is_an_error() {
        assert_eq!(
            run_checks(&demo_signal(12), 1e-9).unwrap_err(),
            WalshError::InvalidLength(12)
        );
    }

    #[test]
    fn agreement_matches_library_cross_check() {
        let x = demo_signal(32);
        let report = run_checks(&x, 1e-9).unwrap();
        let reference = walshkit::crosscheck::cross_validate(&x).unwrap();
        assert_eq!(report.fast_vs_matrix, reference.fast_vs_matrix);
        assert_eq!(report.direct_vs_matrix, reference.direct_vs_matrix);
        assert_eq!(report.direct_vs_fast_sorted, reference.direct_vs_fast_sorted);
        assert_eq!(report.methods[2].roundtrip_error, reference.direct_roundtrip);
    }

    #[test]
    fn json_output_has_fields() {
        let report = run_checks(&[1.0, 0.0, 1.0, 0.0], 1e-9).unwrap();
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["len"], 4);
        assert_eq!(value["passed"], true);
        assert_eq!(value["methods"][0]["name"], "fast");
        assert_eq!(value["methods"][0]["forward"][0], 2.0);
    }
}
