use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use compute_patch::{compute_patch, read_lines, write_patch, RenderConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: compute-patch ORIGINAL TARGET";

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the patch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(original), Some(target), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&original, &target) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(original_path: &str, target_path: &str) -> Result<()> {
    let original = read_lines(original_path)
        .with_context(|| format!("failed to read original {original_path}"))?;
    let target =
        read_lines(target_path).with_context(|| format!("failed to read target {target_path}"))?;

    let patch = compute_patch(&original, &target).context("failed to reconstruct patch")?;

    let stdout = io::stdout();
    write_patch(&mut stdout.lock(), &patch, &RenderConfig::default())
        .context("failed to write patch")?;

    let stats = patch.stats();
    info!(
        cost = patch.cost,
        edits = stats.edit_count(),
        lines_deleted = stats.lines_deleted,
        "patch written"
    );
    Ok(())
}
