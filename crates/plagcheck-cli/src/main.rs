use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulated plagiarism and AI-content checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze text locally and print the report.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Send a document to a running checker service.
    Upload(cmd::upload::UploadArgs),
}

fn main() {
    // Reports go to stdout; keep the log on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let outcome = match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, matches.subcommand_matches("analyze")),
        Commands::Upload(args) => cmd::upload::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
