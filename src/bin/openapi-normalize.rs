//! OpenAPI Normalizer CLI
//!
//! Reads an OpenAPI JSON document, normalizes it and writes the canonical form.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use openapi_normalize::{
    load_document, normalize, write_document, NormalizeOptions, DEFAULT_SENTINEL,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openapi-normalize")]
#[command(about = "Normalize OpenAPI specifications for comparison")]
#[command(version)]
struct Cli {
    /// OpenAPI JSON document to normalize
    input: PathBuf,

    /// Where to write the normalized document
    output: PathBuf,

    /// Value written over info.title, info.version and info.description
    #[arg(long, default_value = DEFAULT_SENTINEL)]
    sentinel: String,

    /// Keep generated 404 responses on GET endpoints returning arrays
    #[arg(long)]
    keep_list_not_found: bool,

    /// Log normalization details to stderr (RUST_LOG overrides)
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), u8> {
    let document = load_document(&cli.input).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let options = NormalizeOptions::new()
        .sentinel(cli.sentinel)
        .prune_list_not_found(!cli.keep_list_not_found);
    let normalized = normalize(document, &options);

    write_document(&cli.output, &normalized).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    info!(output = %cli.output.display(), "wrote normalized document");
    Ok(())
}
