//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, ReportOptions};
use brickset::output::OutputMode;

/// brickset - Query a Brickset catalog export
#[derive(Parser, Debug)]
#[command(
    name = "brickset",
    version,
    about = "Query a Brickset catalog export",
    long_about = "Load a Brickset set list once and print a fixed report over it.\n\n\
                  Without a data file the bundled dataset is used."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Data file to load (overrides config)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file (default: ./brickset.toml, then ~/.brickset/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the query report (default)
    Report {
        /// Largest tag count for the tag threshold query
        #[arg(long)]
        max_tags: Option<usize>,

        /// Tag to count (case-sensitive)
        #[arg(long)]
        tag: Option<String>,

        /// Name prefix to search for (case-insensitive)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut options = ReportOptions {
        data: cli.data,
        config: cli.config,
        max_tags: None,
        tag: None,
        prefix: None,
    };

    match cli.command {
        Some(Command::Report {
            max_tags,
            tag,
            prefix,
        }) => {
            options.max_tags = max_tags;
            options.tag = tag;
            options.prefix = prefix;
            commands::report(&options, output_mode)
        },
        None => commands::report(&options, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("brickset v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
