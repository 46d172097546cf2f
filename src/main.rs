//! classmap - class diagrams from source trees

mod diagram_cli;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "classmap")]
#[command(about = "Heuristic class diagrams (draw.io) from repository source trees", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a draw.io class diagram
    Generate(diagram_cli::GenerateArgs),
    /// List the files that would be inspected
    Archives(diagram_cli::ArchivesArgs),
    /// Show supported languages
    Languages,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => diagram_cli::generate(args).await?,
        Commands::Archives(args) => diagram_cli::archives(args).await?,
        Commands::Languages => diagram_cli::languages(),
    }

    Ok(())
}
