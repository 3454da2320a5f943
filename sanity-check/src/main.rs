use clap::Parser;
use sanity_check::{demo_signal, read_wav, render, run_checks, OutputFormat};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Run the fast, matrix and direct Walsh-Hadamard transforms on one signal
/// and check that they agree.
#[derive(Parser)]
struct Args {
    /// Number of samples of the built-in test signal (power of two)
    #[arg(long, default_value_t = 16)]
    len: usize,

    /// Take samples from a WAV file instead of the built-in signal
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Upper bound on samples read from `--wav`
    #[arg(long, default_value_t = 1024)]
    max_len: usize,

    /// Largest accepted round-trip or cross-method deviation
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let signal = match &args.wav {
        Some(path) => read_wav(path, args.max_len)?,
        None => demo_signal(args.len),
    };
    let report = run_checks(&signal, args.tolerance)?;
    println!("{}", render(&report, args.format)?);
    if !report.passed {
        log::warn!("transforms disagree beyond tolerance {}", args.tolerance);
    }
    Ok(report.passed)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
