//! Command-line interface for martgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Banking dataset with the default row counts (40 dimension, 10000 fact)
//! martgen generate banking
//!
//! # Small reproducible e-commerce dataset as JSONL
//! martgen generate ecommerce \
//!   --dim-rows 10 --fact-rows 200 \
//!   --output-dir /tmp/demo --format jsonl --seed 42
//!
//! # List the supported domains
//! martgen domains
//! ```

use clap::{Parser, Subcommand};
use martgen::{run_generate, GenerateRequest, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "martgen")]
#[command(about = "A tool for generating synthetic dimension/fact datasets for analytics demos")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and export the dimension and fact tables for one domain
    Generate {
        /// Business domain, case-insensitive (see `martgen domains`)
        domain: String,

        /// Number of dimension rows
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u64).range(1..))]
        dim_rows: u64,

        /// Number of fact rows
        #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
        fact_rows: u64,

        /// Directory for the exported files, created if absent
        #[arg(long, default_value = "data")]
        output_dir: PathBuf,

        /// Output file format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the supported domains
    Domains,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            domain,
            dim_rows,
            fact_rows,
            output_dir,
            format,
            seed,
        } => {
            let files = run_generate(&GenerateRequest {
                domain,
                dim_rows,
                fact_rows,
                output_dir,
                format,
                seed,
            })?;
            println!("Dimension table saved to {}", files.dimension.display());
            println!("Fact table saved to {}", files.facts.display());
        }
        Commands::Domains => {
            for name in martgen_domains::supported() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
