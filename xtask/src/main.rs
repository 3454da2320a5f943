use anyhow::Result;
use clap::{Parser, Subcommand};
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for walshkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    /// fmt followed by clippy
    Analyze,
    Bench,
    /// Cross-check the three transforms on one signal
    Sanity {
        /// Samples of the built-in test signal
        #[arg(long)]
        len: Option<usize>,
        /// WAV file to take samples from
        #[arg(long)]
        wav: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    match cli.command {
        Commands::Build => run(build_command(&cfg)),
        Commands::Test => run(test_command(&cfg)),
        Commands::Clippy => run(clippy_command()),
        Commands::Fmt => run(fmt_command()),
        Commands::Analyze => {
            run(fmt_command())?;
            run(clippy_command())
        }
        Commands::Bench => run(bench_command(&cfg)),
        Commands::Sanity { len, wav, json } => {
            run(sanity_command(&cfg, &SanityArgs { len, wav, json }))
        }
    }
}
