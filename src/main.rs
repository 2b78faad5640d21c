//! build-manifest - write manifest.json for the dashboards/ directory

use clap::Parser;

use dashboard_manifest::{logging, ManifestBuilder, ManifestPaths};

#[derive(Parser)]
#[command(name = "build-manifest")]
#[command(
    author,
    version,
    about = "Write manifest.json listing dashboards/*.html, newest first"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();
    logging::init();

    let builder = ManifestBuilder::new(ManifestPaths::new()?);

    let count = builder.build()?;
    println!("Wrote {} entries to {}", count, builder.paths().output_name());

    Ok(())
}
