//! pubfresh - dependency freshness checker CLI
//!
//! Scans a pubspec.yaml manifest, reports dependencies that are outdated on
//! pub.dev, and optionally writes the updated version tokens back in place.

use clap::Parser;
use pubfresh::cli::CliArgs;
use pubfresh::engine::{apply_edits, FreshnessEngine};
use pubfresh::error::ManifestError;
use pubfresh::output;
use pubfresh::progress::CliProgress;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("pubfresh v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", args.path.display());
    }

    if !args.path.exists() {
        return Err(ManifestError::not_found(&args.path).into());
    }
    let text = fs::read_to_string(&args.path)
        .map_err(|e| ManifestError::read_error(&args.path, e))?;

    let mut engine = FreshnessEngine::new()?;
    let mut progress = CliProgress::new(args.show_progress());
    let entries = engine.scan_with_progress(&text, &mut progress).await?;
    progress.finish_and_clear();

    if args.json {
        println!("{}", output::render_json(&entries)?);
    } else {
        print!("{}", output::render_text(&entries));
    }

    if args.apply && !entries.is_empty() {
        let updated = apply_edits(&text, &entries, args.keep_prefix());
        fs::write(&args.path, updated)
            .map_err(|e| ManifestError::write_error(&args.path, e))?;
        if args.verbose {
            eprintln!("Applied {} updates to {}", entries.len(), args.path.display());
        }
    }

    engine.clear_cache();
    Ok(ExitCode::SUCCESS)
}
