//! Clima CLI - Command Line Operations for City Temperature Series
//!
//! This is the operational entry point for the Clima temperature toolkit.
//!
//! # Commands
//!
//! - `clima estimate --city <name> --month <m>` - Interpolate a temperature
//! - `clima cities` - List cities in the data set
//! - `clima check` - Validate a data file
//!
//! Commands read a CSV data file directly (`--data`), or fall back to the
//! bundled sample data when none is given. Unlike the dashboard server,
//! the CLI is strict: an out-of-range month is an error, never a silent
//! fallback.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Clima temperature toolkit CLI
#[derive(Parser)]
#[command(name = "clima")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a temperature at an arbitrary month
    Estimate {
        /// City to estimate for
        #[arg(short, long)]
        city: String,

        /// Temperature kind (max, min)
        #[arg(short, long, default_value = "max")]
        kind: String,

        /// Query month, may be fractional (1.0 - 12.0)
        #[arg(short, long, default_value = "6.5")]
        month: f64,

        /// CSV data file; omit to use the bundled sample data
        #[arg(short, long)]
        data: Option<String>,

        /// Output format (plain, json, table)
        #[arg(short, long, default_value = "plain")]
        format: String,
    },

    /// List cities available in the data set
    Cities {
        /// CSV data file; omit to use the bundled sample data
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Validate a CSV data file
    Check {
        /// CSV data file; omit to check the bundled sample data
        #[arg(short, long)]
        data: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Estimate {
            city,
            kind,
            month,
            data,
            format,
        } => commands::estimate::run(&city, &kind, month, data.as_deref(), &format),
        Commands::Cities { data } => commands::cities::run(data.as_deref()),
        Commands::Check { data } => commands::check::run(data.as_deref()),
    }
}
