//! CLI application for extracting invoice totals with Gemini.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, price, GeminiArgs};

/// Invoice price extraction - ask Gemini for the total of an invoice
#[derive(Parser)]
#[command(name = "invprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    gemini: GeminiArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the total price of a single invoice
    Price(price::PriceArgs),

    /// Extract prices from multiple invoice files
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Price(args) => price::run(args, cli.config.as_deref(), &cli.gemini).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref(), &cli.gemini).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}
