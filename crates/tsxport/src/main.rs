//! tsxport CLI - convert TSX page components into standalone HTML documents.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "tsxport")]
#[command(about = "Convert TSX page components into standalone HTML documents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to tsxport.toml config file
    #[arg(short, long, default_value = "tsxport.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default tsxport.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert every component in the components directory
    Convert {
        /// Source root (defaults to config or ".")
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output root (defaults to config or "html")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the generated stylesheets
        #[arg(long)]
        minify: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Convert {
            source,
            output,
            minify,
        } => {
            let minify = if minify { Some(true) } else { None };
            commands::convert::run(&cli.config, source, output, minify)?;
        }
    }

    Ok(())
}
