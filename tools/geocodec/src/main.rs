mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{classify::ClassifyArgs, decode::DecodeArgs, encode::EncodeArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geocodec", about = "Decode and encode native database geometry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a raw native geometry payload
    Decode(DecodeArgs),
    /// Build a geometry-from-text literal from coordinates
    Encode(EncodeArgs),
    /// List the geospatial fields of a schema
    Classify(ClassifyArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(args) => args.run(),
        Commands::Encode(args) => args.run(),
        Commands::Classify(args) => args.run(),
    }
}
