//! martgen: synthetic dimension/fact dataset generation.
//!
//! Ties the workspace crates together into the end-to-end pipeline: resolve
//! a domain to its schema pair, materialize the dimension table, materialize
//! the fact table against it, and export both to flat files.

use anyhow::Context;
use martgen_export::{export_csv, export_jsonl};
use martgen_generator::TableGenerator;
use std::path::PathBuf;
use tracing::info;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-delimited with a header row
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Jsonl => "jsonl",
        }
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Domain name, case-insensitive.
    pub domain: String,
    /// Dimension table row count.
    pub dim_rows: u64,
    /// Fact table row count.
    pub fact_rows: u64,
    /// Directory for the exported files, created if absent.
    pub output_dir: PathBuf,
    /// Output file format.
    pub format: OutputFormat,
    /// Seed for reproducible output; unseeded runs draw from OS entropy.
    pub seed: Option<u64>,
}

/// Paths of the files written by a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub dimension: PathBuf,
    pub facts: PathBuf,
}

/// Run the full pipeline for one domain.
///
/// There is no partial-success rollback: if the fact export fails, an
/// already-written dimension file stays on disk.
pub fn run_generate(request: &GenerateRequest) -> anyhow::Result<GeneratedFiles> {
    let schema = martgen_domains::resolve(&request.domain)?;
    let domain = request.domain.to_lowercase();

    let mut generator = match request.seed {
        Some(seed) => TableGenerator::new(seed),
        None => TableGenerator::from_os_rng(),
    };

    info!(
        "generating {} dimension rows for '{domain}'",
        request.dim_rows
    );
    let dimension = generator
        .generate_dimension(&schema.dimension, request.dim_rows)
        .with_context(|| format!("generating dimension table for '{domain}'"))?;

    info!("generating {} fact rows for '{domain}'", request.fact_rows);
    let facts = generator
        .generate_facts(&schema.facts, &dimension, request.fact_rows)
        .with_context(|| format!("generating fact table for '{domain}'"))?;

    let extension = request.format.extension();
    let dimension_path = request
        .output_dir
        .join(format!("{domain}_dimension.{extension}"));
    let facts_path = request.output_dir.join(format!("{domain}_facts.{extension}"));

    match request.format {
        OutputFormat::Csv => {
            export_csv(&dimension, &dimension_path)
                .with_context(|| format!("exporting dimension table for '{domain}'"))?;
            export_csv(&facts, &facts_path)
                .with_context(|| format!("exporting fact table for '{domain}'"))?;
        }
        OutputFormat::Jsonl => {
            export_jsonl(&dimension, &dimension_path)
                .with_context(|| format!("exporting dimension table for '{domain}'"))?;
            export_jsonl(&facts, &facts_path)
                .with_context(|| format!("exporting fact table for '{domain}'"))?;
        }
    }

    Ok(GeneratedFiles {
        dimension: dimension_path,
        facts: facts_path,
    })
}
