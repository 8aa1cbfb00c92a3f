//! Shelfwatch CLI — the main entry point.
//!
//! Commands:
//! - `onboard` — Initialize config & sample data
//! - `report`  — Generate the expiration report
//! - `status`  — Show counts and configuration without calling a provider

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "shelfwatch",
    about = "Shelfwatch — restaurant inventory expiration reporting",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and sample data
    Onboard,

    /// Generate the expiration report
    Report {
        /// Inventory CSV path (overrides config)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Report output path (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Expiring-soon window in days (overrides config)
        #[arg(long)]
        window: Option<u32>,

        /// Reference date, YYYY-MM-DD (defaults to the current date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Per-table row cap in the rendered report
        #[arg(long)]
        limit: Option<usize>,

        /// Skip the narrative recommendations section
        #[arg(long)]
        no_narrative: bool,

        /// Also write per-bucket CSV slices next to the report
        #[arg(long)]
        slices: bool,
    },

    /// Show bucket counts and configuration
    Status {
        /// Inventory CSV path (overrides config)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Expiring-soon window in days (overrides config)
        #[arg(long)]
        window: Option<u32>,

        /// Reference date, YYYY-MM-DD (defaults to the current date)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Report {
            csv,
            output,
            window,
            today,
            limit,
            no_narrative,
            slices,
        } => {
            commands::report::run(commands::report::ReportArgs {
                csv,
                output,
                window,
                today,
                limit,
                no_narrative,
                slices,
            })
            .await?
        }
        Commands::Status { csv, window, today } => {
            commands::status::run(csv, window, today).await?
        }
    }

    Ok(())
}
