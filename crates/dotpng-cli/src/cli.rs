use anyhow::{Context, Result};
use clap::Parser;
use dotpng_core::config::{OutputTarget, DOT_DATA_URI};
use dotpng_core::emit;

/// Writes the embedded 1x1 pixel image to public/dot.png.
#[derive(Debug, Parser)]
#[command(name = "dotpng", version)]
#[command(about = "Decode the embedded pixel image and write it to public/dot.png", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        run()
    }
}

fn run() -> Result<()> {
    let target = OutputTarget::default();
    let report = emit(DOT_DATA_URI, &target)
        .with_context(|| format!("writing {}", target.file_path().display()))?;
    println!(
        "wrote {} bytes to {} (sha256 {})",
        report.bytes_written,
        report.path.display(),
        report.sha256
    );
    Ok(())
}

#[cfg(test)]
mod tests;
