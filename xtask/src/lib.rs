use anyhow::{bail, Context, Result};
use std::env;
use std::process::Command;

/// Cargo feature selection for the workspace tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }

    pub fn has(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Detect build configuration from the current machine and `WALSHKIT_FEATURES`.
pub fn detect_config() -> BuildConfig {
    let extra = env::var("WALSHKIT_FEATURES").unwrap_or_default();
    compute_config(detect_nproc(), &extra)
}

fn detect_nproc() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(nproc: usize, extra: &str) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();
    if nproc > 1 {
        features.push("parallel".into());
    }
    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }
    BuildConfig { features }
}

fn with_features(cmd: &mut Command, features: Option<String>) {
    if let Some(f) = features {
        cmd.arg("--features").arg(f);
    }
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--workspace"]);
    with_features(&mut cmd, cfg.features_arg());
    cmd
}

/// `cargo test` on the library with the in-crate proptest suites enabled.
pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["test", "-p", "walshkit"]);
    let mut features = cfg.features.clone();
    if !cfg.has("internal-tests") {
        features.push("internal-tests".into());
    }
    with_features(&mut cmd, Some(features.join(" ")));
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--workspace", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

/// Criterion benches; only `parallel` is forwarded since the bench crate
/// exposes no other features.
pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "-p", "walshkit-bench"]);
    if cfg.has("parallel") {
        cmd.args(["--features", "parallel"]);
    }
    cmd
}

/// Arguments forwarded to the `sanity-check` binary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SanityArgs {
    pub len: Option<usize>,
    pub wav: Option<String>,
    pub json: bool,
}

pub fn sanity_command(cfg: &BuildConfig, args: &SanityArgs) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-r", "-p", "sanity-check"]);
    if cfg.has("parallel") {
        cmd.args(["--features", "parallel"]);
    }
    cmd.arg("--");
    if let Some(len) = args.len {
        cmd.arg("--len").arg(len.to_string());
    }
    if let Some(wav) = &args.wav {
        cmd.arg("--wav").arg(wav);
    }
    if args.json {
        cmd.args(["--format", "json"]);
    }
    cmd
}

/// Run `cmd`, failing on a non-zero exit.
pub fn run(mut cmd: Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !status.success() {
        bail!("{:?} exited with {}", cmd.get_program(), status);
    }
    Ok(())
}
